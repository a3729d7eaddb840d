use anyhow::Result;
use std::io::{self, IsTerminal};

use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};
use crate::input::{BufferedLineSource, PromptLineSource};
use crate::shell::{self, Environment, Shell};
use crate::translation::GoogleTranslateClient;
use crate::ui::Style;

pub struct ShellOptions {
    pub from: Option<String>,
    pub to: Option<String>,
    pub endpoint: Option<String>,
}

/// Runs the shell until end of input.
///
/// Uses the interactive prompt on a terminal and a plain line reader otherwise.
pub async fn run_shell(options: ShellOptions) -> Result<()> {
    let config = load_session_config(&options)?;

    let client = GoogleTranslateClient::new(config.endpoint);
    let env = Environment::new(config.source, config.target);
    let mut session = Shell::new(client, env);

    if io::stdin().is_terminal() {
        shell::print_header();
        session.run(PromptLineSource::new()).await;
        shell::print_goodbye();
    } else {
        session.run(BufferedLineSource::new(io::stdin().lock())).await;
    }

    Ok(())
}

fn load_session_config(options: &ShellOptions) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let file_config = manager.load().unwrap_or_else(|e| {
        crate::warn!("{} {e:#}; using defaults", Style::warning("Warning:"));
        None
    });

    let resolve_options = ResolveOptions {
        from: options.from.clone(),
        to: options.to.clone(),
        endpoint: options.endpoint.clone(),
    };

    Ok(resolve_config(
        &resolve_options,
        &file_config.unwrap_or_default(),
    ))
}
