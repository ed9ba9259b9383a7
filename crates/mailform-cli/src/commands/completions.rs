use anyhow::{Context as _, Result};
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
    /// Write the script to a file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    let mut cmd = crate::Cli::command();
    let bin_name = cmd.get_name().to_string();
    match args.out {
        Some(path) => {
            let mut file = File::create(&path)
                .with_context(|| format!("create completions file {}", path.display()))?;
            generate(args.shell, &mut cmd, bin_name, &mut file);
        }
        None => generate(args.shell, &mut cmd, bin_name, &mut io::stdout().lock()),
    }
    Ok(())
}
