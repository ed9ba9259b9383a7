mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{check, completions, compose, Context};
use crate::error::{exit_code_for, report_error};
use mailform_config as config;

#[derive(Debug, Parser)]
#[command(name = "mailform", version, about = "mailform CLI")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate a single field value
    #[command(name = "check-field")]
    CheckField(check::CheckFieldArgs),
    /// Validate every field of a form
    Check(check::CheckArgs),
    /// Validate a form and print its mailto link
    Compose(compose::ComposeArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        config: config_path,
        json,
        verbose,
        command,
    } = cli;
    let context = || load_context(config_path.clone(), json, verbose);

    match command {
        Command::Completions(args) => completions::emit(args),
        Command::CheckField(args) => check::check_field(&context()?, args),
        Command::Check(args) => check::check_form(&context()?, args),
        Command::Compose(args) => compose::compose(&context()?, args),
    }
}

fn load_context(config_path: Option<PathBuf>, json: bool, verbose: bool) -> Result<Context> {
    let config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) if path.exists() => debug!(path = %path.display(), "config resolved"),
            Ok(path) => debug!(path = %path.display(), "config missing, using defaults"),
            Err(err) => debug!(error = %err, "config unavailable"),
        }
        debug!(recipient = %config.contact.recipient, "contact recipient");
    }
    Ok(Context { json, config })
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
