pub mod email;
pub mod validation;

pub use email::is_valid_email;
pub use validation::{
    check_field, rules_for, utf16_len, validate_field, validate_form, Rule, ValidatedForm,
    ValidationResult, MESSAGE_MIN_LENGTH, NAME_MIN_LENGTH,
};
