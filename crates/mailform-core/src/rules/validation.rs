use crate::domain::{normalize_field_value, FieldId, FormValues};
use crate::dto::FieldCheckDto;
use crate::rules::email::is_valid_email;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

pub const NAME_MIN_LENGTH: usize = 2;
pub const MESSAGE_MIN_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Required(&'static str),
    /// Length in UTF-16 code units, as a browser's `String.length` reports it.
    MinLength(usize, &'static str),
    EmailShape(&'static str),
}

impl Rule {
    pub fn message(self) -> &'static str {
        match self {
            Rule::Required(message) | Rule::MinLength(_, message) | Rule::EmailShape(message) => {
                message
            }
        }
    }

    /// Returns the failure message when `value` (already trimmed) breaks this rule.
    pub fn check(self, value: &str) -> Option<&'static str> {
        let failed = match self {
            Rule::Required(_) => value.is_empty(),
            Rule::MinLength(min, _) => utf16_len(value) < min,
            Rule::EmailShape(_) => !is_valid_email(value),
        };
        failed.then(|| self.message())
    }
}

pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

const NAME_RULES: &[Rule] = &[
    Rule::Required("Name is required"),
    Rule::MinLength(NAME_MIN_LENGTH, "Name must be at least 2 characters"),
];

const EMAIL_RULES: &[Rule] = &[
    Rule::Required("Email is required"),
    Rule::EmailShape("Please enter a valid email address"),
];

const SUBJECT_RULES: &[Rule] = &[Rule::Required("Please select a subject")];

const MESSAGE_RULES: &[Rule] = &[
    Rule::Required("Message is required"),
    Rule::MinLength(MESSAGE_MIN_LENGTH, "Message must be at least 10 characters"),
];

/// Ordered rules for a field; the first failing rule decides the message.
pub fn rules_for(field: FieldId) -> &'static [Rule] {
    match field {
        FieldId::Name => NAME_RULES,
        FieldId::Email => EMAIL_RULES,
        FieldId::Phone => &[],
        FieldId::Subject => SUBJECT_RULES,
        FieldId::Message => MESSAGE_RULES,
    }
}

pub fn validate_field(field: FieldId, value: &str) -> Option<&'static str> {
    let value = normalize_field_value(value);
    rules_for(field)
        .iter()
        .find_map(|rule| rule.check(&value))
}

pub fn check_field(field: FieldId, value: &str) -> FieldCheckDto {
    let message = validate_field(field, value);
    FieldCheckDto {
        field,
        valid: message.is_none(),
        message: message.map(str::to_string),
    }
}

/// Checks every field without stopping at the first failure.
pub fn validate_form(values: &FormValues) -> ValidationResult {
    let mut result = ValidationResult::default();
    for field in FieldId::ALL {
        if let Some(message) = validate_field(field, values.get(field)) {
            result.insert(field, message);
        }
    }
    result
}

/// Per-field error messages from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: BTreeMap<FieldId, String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldId) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }

    /// Replaces any existing error for `field`.
    pub fn insert(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn remove(&mut self, field: FieldId) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ValidationResult", 2)?;
        state.serialize_field("valid", &self.is_valid())?;
        state.serialize_field("errors", &self.errors)?;
        state.end()
    }
}

/// A form whose values passed [`validate_form`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedForm(FormValues);

impl ValidatedForm {
    pub fn values(&self) -> &FormValues {
        &self.0
    }

    pub fn into_values(self) -> FormValues {
        self.0
    }
}

impl FormValues {
    pub fn validate(self) -> Result<ValidatedForm, ValidationResult> {
        let values = self.normalized();
        let result = validate_form(&values);
        if result.is_valid() {
            Ok(ValidatedForm(values))
        } else {
            Err(result)
        }
    }
}
