use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use mailform_core::{MailtoComposer, DEFAULT_PHONE_PLACEHOLDER};
use serde::Deserialize;
use thiserror::Error;

const APP_DIR: &str = "mailform";
const CONFIG_FILENAME: &str = "config.toml";

pub const DEFAULT_RECIPIENT: &str = "info@taxproconsultants.ca";
pub const DEFAULT_SUCCESS_MESSAGE: &str = "Thank you for contacting us! Your message has been prepared. Please send it through your email client.";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactConfig {
    pub recipient: String,
    pub phone_placeholder: String,
    pub success_message: String,
}

impl ContactConfig {
    pub fn composer(&self) -> MailtoComposer {
        MailtoComposer::new(self.recipient.clone())
            .with_phone_placeholder(self.phone_placeholder.clone())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contact: ContactConfig {
                recipient: DEFAULT_RECIPIENT.to_string(),
                phone_placeholder: DEFAULT_PHONE_PLACEHOLDER.to_string(),
                success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
            },
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("invalid contact.recipient value: {0}")]
    InvalidRecipient(String),
    #[error("contact.{0} cannot be empty")]
    EmptyContactField(&'static str),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    contact: Option<ContactFile>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContactFile {
    recipient: Option<String>,
    phone_placeholder: Option<String>,
    success_message: Option<String>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    if let Some(contact) = parsed.contact {
        if let Some(recipient) = contact.recipient {
            config.contact.recipient = validate_recipient(&recipient)?;
        }
        if let Some(placeholder) = contact.phone_placeholder {
            config.contact.phone_placeholder = non_empty(placeholder, "phone_placeholder")?;
        }
        if let Some(message) = contact.success_message {
            config.contact.success_message = non_empty(message, "success_message")?;
        }
    }

    Ok(config)
}

fn validate_recipient(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    let address: lettre::Address = trimmed
        .parse()
        .map_err(|_| ConfigError::InvalidRecipient(trimmed.to_string()))?;
    Ok(address.to_string())
}

fn non_empty(value: String, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyContactField(field));
    }
    Ok(trimmed.to_string())
}
