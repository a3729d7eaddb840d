use inquire::autocompletion::{Autocomplete, Replacement};

// Available commands: (prefix, description)
const COMMANDS: &[(&str, &str)] = &[
    ("set ", "Set environment variables (key=value ...)"),
    ("get ", "Show an environment variable"),
    ("trt ", "Translate the rest of the line"),
    ("trf ", "Translate a file"),
    ("help", "Show usage"),
];

/// Completes command words at the start of the line.
#[derive(Clone, Default)]
pub struct CommandCompleter;

impl Autocomplete for CommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if input.is_empty() || input.contains(' ') {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{}  {desc}", cmd.trim_end()))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement = highlighted_suggestion.map(|s| {
            let word = s.split_whitespace().next().unwrap_or_default();
            if word == "help" {
                word.to_string()
            } else {
                format!("{word} ")
            }
        });
        Ok(replacement)
    }
}

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    /// `key=value` tokens; empty tokens from repeated spaces are dropped.
    Set(Vec<&'a str>),
    Get(&'a str),
    TranslateText(&'a str),
    TranslateFile(&'a str),
    Help,
    Empty,
    Invalid,
}

/// Classifies a line by its literal, case-sensitive prefix.
///
/// The remainder after the prefix is passed through untouched.
pub fn parse_line(line: &str) -> Command<'_> {
    if let Some(rest) = line.strip_prefix("set ") {
        Command::Set(rest.split(' ').filter(|token| !token.is_empty()).collect())
    } else if let Some(rest) = line.strip_prefix("get ") {
        Command::Get(rest)
    } else if let Some(rest) = line.strip_prefix("trt ") {
        Command::TranslateText(rest)
    } else if let Some(rest) = line.strip_prefix("trf ") {
        Command::TranslateFile(rest)
    } else if line.starts_with("help") {
        Command::Help
    } else if line.is_empty() {
        Command::Empty
    } else {
        Command::Invalid
    }
}
