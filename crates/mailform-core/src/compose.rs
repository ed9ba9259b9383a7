use crate::domain::FormValues;
use crate::error::CoreError;
use crate::rules::ValidatedForm;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fmt;

pub const DEFAULT_PHONE_PLACEHOLDER: &str = "Not provided";

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

/// A `mailto:` URI ready to hand to the platform mail handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionIntent(String);

impl SubmissionIntent {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SubmissionIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MailtoComposer {
    recipient: String,
    phone_placeholder: String,
}

impl MailtoComposer {
    /// `recipient` goes into the URI verbatim; callers validate it up front.
    pub fn new(recipient: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            phone_placeholder: DEFAULT_PHONE_PLACEHOLDER.to_string(),
        }
    }

    pub fn with_phone_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.phone_placeholder = placeholder.into();
        self
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn phone_placeholder(&self) -> &str {
        &self.phone_placeholder
    }

    pub fn body(&self, values: &FormValues) -> String {
        let phone = if values.phone.is_empty() {
            self.phone_placeholder.as_str()
        } else {
            values.phone.as_str()
        };
        format!(
            "Name: {}\nEmail: {}\nPhone: {}\n\nMessage:\n{}",
            values.name, values.email, phone, values.message
        )
    }

    pub fn compose(&self, form: &ValidatedForm) -> SubmissionIntent {
        let values = form.values();
        SubmissionIntent(format!(
            "mailto:{}?subject={}&body={}",
            self.recipient,
            encode_uri_component(&values.subject),
            encode_uri_component(&self.body(values))
        ))
    }

    /// Validates first; invalid values never produce a URI.
    pub fn compose_submission(&self, values: &FormValues) -> Result<SubmissionIntent, CoreError> {
        let form = values
            .clone()
            .validate()
            .map_err(CoreError::InvalidSubmission)?;
        Ok(self.compose(&form))
    }
}
