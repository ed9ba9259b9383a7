pub mod compose;
pub mod domain;
pub mod dto;
pub mod error;
pub mod feedback;
pub mod rules;

pub use compose::{
    encode_uri_component, MailtoComposer, SubmissionIntent, DEFAULT_PHONE_PLACEHOLDER,
};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use feedback::FieldErrors;
pub use rules::*;
