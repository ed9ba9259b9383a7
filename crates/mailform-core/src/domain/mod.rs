pub mod field;
pub mod form;

pub use field::FieldId;
pub use form::{is_form_whitespace, normalize_field_value, FormValues};
