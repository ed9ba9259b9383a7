//! Displayed-error bookkeeping for a form driven by blur, input and submit events.
//!
//! The host page mirrors [`FieldErrors::errors`] into its error markers after each
//! event. Resetting the form some time after a successful submit is left to the host;
//! it calls [`FieldErrors::reset`] when it clears the inputs.

use crate::compose::{MailtoComposer, SubmissionIntent};
use crate::domain::{FieldId, FormValues};
use crate::rules::{validate_field, ValidationResult};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    current: ValidationResult,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.current
    }

    pub fn message(&self, field: FieldId) -> Option<&str> {
        self.current.get(field)
    }

    /// Revalidates one field. A passing value clears its previous error.
    pub fn on_blur(&mut self, field: FieldId, value: &str) -> Option<&str> {
        match validate_field(field, value) {
            Some(message) => self.current.insert(field, message),
            None => {
                self.current.remove(field);
            }
        }
        self.current.get(field)
    }

    /// Clears the field's error as soon as its value changes. Returns whether one was shown.
    pub fn on_input(&mut self, field: FieldId) -> bool {
        self.current.remove(field).is_some()
    }

    /// Replaces all errors with a fresh full-form pass and composes when it passes.
    pub fn on_submit(
        &mut self,
        composer: &MailtoComposer,
        values: &FormValues,
    ) -> Option<SubmissionIntent> {
        self.current.clear();
        match values.clone().validate() {
            Ok(form) => Some(composer.compose(&form)),
            Err(errors) => {
                self.current = errors;
                None
            }
        }
    }

    pub fn reset(&mut self) {
        self.current.clear();
    }
}
