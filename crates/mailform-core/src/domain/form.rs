use crate::domain::FieldId;
use serde::{Deserialize, Serialize};

/// Trimmed values of one contact form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl FormValues {
    pub fn new(name: &str, email: &str, phone: &str, subject: &str, message: &str) -> Self {
        Self {
            name: normalize_field_value(name),
            email: normalize_field_value(email),
            phone: normalize_field_value(phone),
            subject: normalize_field_value(subject),
            message: normalize_field_value(message),
        }
    }

    /// Re-trims every field. Deserialized documents arrive untrimmed.
    pub fn normalized(self) -> Self {
        Self::new(
            &self.name,
            &self.email,
            &self.phone,
            &self.subject,
            &self.message,
        )
    }

    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Subject => &self.subject,
            FieldId::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldId, value: &str) {
        let value = normalize_field_value(value);
        match field {
            FieldId::Name => self.name = value,
            FieldId::Email => self.email = value,
            FieldId::Phone => self.phone = value,
            FieldId::Subject => self.subject = value,
            FieldId::Message => self.message = value,
        }
    }
}

/// Browser `String.prototype.trim` whitespace: Unicode White_Space with U+FEFF added
/// and U+0085 removed.
pub fn is_form_whitespace(ch: char) -> bool {
    ch == '\u{FEFF}' || (ch.is_whitespace() && ch != '\u{0085}')
}

pub fn normalize_field_value(raw: &str) -> String {
    raw.trim_matches(is_form_whitespace).to_string()
}
