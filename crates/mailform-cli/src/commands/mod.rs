use crate::util::read_form_input;
use anyhow::Result;
use clap::Args;
use mailform_config::AppConfig;
use mailform_core::domain::{FieldId, FormValues};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod check;
pub mod completions;
pub mod compose;

pub struct Context {
    pub json: bool,
    pub config: AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Form values from flags, optionally layered over a JSON document.
#[derive(Debug, Args)]
pub struct FormArgs {
    /// JSON object with name/email/phone/subject/message keys (`-` for stdin)
    #[arg(long)]
    pub input: Option<PathBuf>,
    #[arg(long, allow_hyphen_values = true)]
    pub name: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub email: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub phone: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub subject: Option<String>,
    #[arg(long, allow_hyphen_values = true)]
    pub message: Option<String>,
}

impl FormArgs {
    pub fn into_values(self) -> Result<FormValues> {
        let mut values = match self.input.as_deref() {
            Some(path) => read_form_input(path)?,
            None => FormValues::default(),
        };

        let overrides = [
            (FieldId::Name, self.name),
            (FieldId::Email, self.email),
            (FieldId::Phone, self.phone),
            (FieldId::Subject, self.subject),
            (FieldId::Message, self.message),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                values.set(field, &value);
            }
        }
        Ok(values)
    }
}
