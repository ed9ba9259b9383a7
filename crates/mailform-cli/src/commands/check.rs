use crate::commands::{print_json, Context, FormArgs};
use crate::error::invalid_input;
use crate::util::parse_field_id;
use anyhow::Result;
use clap::Args;
use mailform_core::rules::{self, ValidationResult};
use mailform_core::CoreError;
use tracing::debug;

#[derive(Debug, Args)]
pub struct CheckFieldArgs {
    /// One of name, email, phone, subject, message
    pub field: String,
    #[arg(allow_hyphen_values = true)]
    pub value: Option<String>,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

pub fn check_field(ctx: &Context, args: CheckFieldArgs) -> Result<()> {
    let field = parse_field_id(&args.field)?;
    let value = args.value.unwrap_or_default();
    let outcome = rules::check_field(field, &value);
    debug!(field = %field, valid = outcome.valid, "field checked");

    if ctx.json {
        print_json(&outcome)?;
    } else {
        match outcome.message.as_deref() {
            Some(message) => println!("{field}: {message}"),
            None => println!("{field}: ok"),
        }
    }

    if !outcome.valid {
        return Err(invalid_input(format!("{field} failed validation")));
    }
    Ok(())
}

pub fn check_form(ctx: &Context, args: CheckArgs) -> Result<()> {
    let values = args.form.into_values()?;
    let result = rules::validate_form(&values);
    debug!(errors = result.len(), "form checked");

    print_validation(ctx, &result)?;
    if !result.is_valid() {
        return Err(CoreError::InvalidSubmission(result).into());
    }
    Ok(())
}

pub fn print_validation(ctx: &Context, result: &ValidationResult) -> Result<()> {
    if ctx.json {
        return print_json(result);
    }

    if result.is_valid() {
        println!("ok");
        return Ok(());
    }

    for (field, message) in result.iter() {
        println!("{field}: {message}");
    }
    Ok(())
}
