use crate::commands::check::print_validation;
use crate::commands::{print_json, Context, FormArgs};
use anyhow::Result;
use clap::Args;
use mailform_core::dto::ComposeOutputDto;
use mailform_core::CoreError;
use tracing::debug;

#[derive(Debug, Args)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub form: FormArgs,
}

pub fn compose(ctx: &Context, args: ComposeArgs) -> Result<()> {
    let values = args.form.into_values()?;
    let contact = &ctx.config.contact;
    let composer = contact.composer();

    let intent = match composer.compose_submission(&values) {
        Ok(intent) => intent,
        Err(CoreError::InvalidSubmission(errors)) => {
            debug!(errors = errors.len(), "submission rejected");
            print_validation(ctx, &errors)?;
            return Err(CoreError::InvalidSubmission(errors).into());
        }
        Err(err) => return Err(err.into()),
    };
    debug!(recipient = composer.recipient(), "submission composed");

    if ctx.json {
        print_json(&ComposeOutputDto {
            mailto: intent.into_string(),
            message: contact.success_message.clone(),
        })?;
    } else {
        println!("{intent}");
        eprintln!("{}", contact.success_message);
    }
    Ok(())
}
