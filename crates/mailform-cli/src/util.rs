use crate::error::{invalid_input, not_found};
use anyhow::{Context as _, Result};
use mailform_core::domain::{FieldId, FormValues};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

pub fn parse_field_id(raw: &str) -> Result<FieldId> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(invalid_input("field cannot be empty"));
    }
    Ok(trimmed.parse::<FieldId>()?)
}

/// Reads a JSON form document from `path`, or from stdin when `path` is `-`.
pub fn read_form_input(path: &Path) -> Result<FormValues> {
    let contents = if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .with_context(|| "read form from stdin")?;
        buf
    } else {
        if !path.exists() {
            return Err(not_found(format!("input file {}", path.display())));
        }
        fs::read_to_string(path).with_context(|| format!("read form {}", path.display()))?
    };

    let values: FormValues = serde_json::from_str(&contents)
        .map_err(|err| invalid_input(format!("invalid form document: {err}")))?;
    Ok(values.normalized())
}
