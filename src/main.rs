use anyhow::Result;
use clap::Parser;

use gtrans::cli::commands::shell;
use gtrans::cli::{Args, Command};
use gtrans::output::{self, OutputConfig};
use gtrans::translation::{print_languages, validate_language};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(args.quiet, args.no_color));

    match args.command {
        Some(Command::Languages) => {
            print_languages();
        }
        None => {
            if let Some(ref lang) = args.from {
                validate_language(lang, true)?;
            }
            if let Some(ref lang) = args.to {
                validate_language(lang, false)?;
            }

            let options = shell::ShellOptions {
                from: args.from,
                to: args.to,
                endpoint: args.endpoint,
            };
            shell::run_shell(options).await?;
        }
    }

    Ok(())
}
