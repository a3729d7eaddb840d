use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "gtrans")]
#[command(about = "Interactive translation shell")]
#[command(version)]
pub struct Args {
    /// Initial source language code ("auto" to detect)
    #[arg(short = 'f', long = "from")]
    pub from: Option<String>,

    /// Initial target language code (e.g., en, de, zh-cn)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Translation service base URL
    #[arg(short = 'e', long)]
    pub endpoint: Option<String>,

    /// Suppress banner and status messages
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes
    Languages,
}
