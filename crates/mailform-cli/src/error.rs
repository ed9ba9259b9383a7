use anyhow::Error;
use mailform_config::ConfigError;
use mailform_core::CoreError;
use std::error::Error as StdError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
            CliError::NotFound(_) => EXIT_NOT_FOUND,
        }
    }
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    ExitCode::from(exit_status(err))
}

/// First recognised cause in the chain decides the code.
fn exit_status(err: &Error) -> u8 {
    err.chain()
        .find_map(classify_cause)
        .unwrap_or(EXIT_FAILURE)
}

fn classify_cause(cause: &(dyn StdError + 'static)) -> Option<u8> {
    if let Some(err) = cause.downcast_ref::<CliError>() {
        return Some(err.exit_code());
    }
    if let Some(err) = cause.downcast_ref::<ConfigError>() {
        return Some(config_exit_code(err));
    }
    cause
        .downcast_ref::<CoreError>()
        .map(|_| EXIT_INVALID_INPUT)
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::MissingConfigFile(_) => EXIT_NOT_FOUND,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::InvalidRecipient(_)
        | ConfigError::EmptyContactField(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}
