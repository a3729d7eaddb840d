//! Shell UI components.

use std::io::{self, Write};

use crate::translation::{TranslationRequest, TranslationResponse, language_name};
use crate::ui::Style;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// (usage, description)
const USAGE: &[(&str, &str)] = &[
    ("get <key>", "Show an environment variable"),
    (
        "set <key>=<value> ...",
        "Set environment variables, e.g. set source=es target=en",
    ),
    (
        "trt <text>",
        "Translate text from env[source] to env[target] (source defaults to auto)",
    ),
    (
        "trf <src> [dest]",
        "Translate a file; dest defaults to translated-<name> next to src",
    ),
    (r"trf <src> \stdout", "Translate a file and print the result"),
    ("help", "Print this help message"),
];

pub fn print_header() {
    crate::status!(
        "{} {} - Interactive Translation Shell",
        Style::header("gtrans"),
        Style::version(format!("v{VERSION}"))
    );
    crate::status!("Type 'help' for commands, Esc or Ctrl+C to quit");
    crate::status!();
}

pub fn print_goodbye() {
    crate::status!("{}", Style::success("Goodbye!"));
}

pub fn write_help<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "{}", Style::header("Commands"))?;
    for (usage, description) in USAGE {
        writeln!(w, "  {}", Style::command(usage))?;
        writeln!(w, "      {}", Style::secondary(description))?;
    }
    Ok(())
}

/// `<src> [<name>] -> <dst> [<name>]`, naming the codes the user asked for.
///
/// Codes without a registry name (such as `auto`) are shown as-is.
pub fn format_translation_header(
    request: &TranslationRequest,
    response: &TranslationResponse,
) -> String {
    format!(
        "{} [{}] -> {} [{}]",
        response.source,
        display_name(&request.source),
        response.target,
        display_name(&request.target)
    )
}

fn display_name(code: &str) -> &str {
    language_name(code).unwrap_or(code)
}
