use anyhow::{Context, Result};
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Text};
use std::io::BufRead;

use crate::shell::CommandCompleter;
use crate::ui::is_prompt_cancelled;

/// Supplies the shell with one line at a time.
pub trait LineSource {
    /// Returns the next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Interactive prompt with command completion.
pub struct PromptLineSource {
    render_config: RenderConfig<'static>,
}

impl PromptLineSource {
    pub fn new() -> Self {
        let prompt_style = Styled::new(">")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        Self { render_config }
    }
}

impl Default for PromptLineSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for PromptLineSource {
    fn next_line(&mut self) -> Result<Option<String>> {
        let input = Text::new("")
            .with_render_config(self.render_config)
            .with_autocomplete(CommandCompleter)
            .prompt();

        match input {
            Ok(line) => Ok(Some(line)),
            Err(e) if is_prompt_cancelled(&e) => Ok(None),
            Err(InquireError::IO(e)) => Err(e).context("Terminal I/O failed"),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain line reader for piped or scripted input.
pub struct BufferedLineSource<R> {
    reader: R,
}

impl<R: BufRead> BufferedLineSource<R> {
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufferedLineSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let bytes_read = self
            .reader
            .read_line(&mut line)
            .context("Failed to read from stdin")?;

        if bytes_read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        Ok(Some(line))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_buffered_source_strips_terminators() {
        let mut source = BufferedLineSource::new(Cursor::new("set a=b\r\nget a\nlast"));

        assert_eq!(source.next_line().unwrap().as_deref(), Some("set a=b"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("get a"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("last"));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_buffered_source_keeps_blank_lines() {
        let mut source = BufferedLineSource::new(Cursor::new("\n\n"));

        assert_eq!(source.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(source.next_line().unwrap().as_deref(), Some(""));
        assert_eq!(source.next_line().unwrap(), None);
    }

    #[test]
    fn test_buffered_source_keeps_trailing_spaces() {
        let mut source = BufferedLineSource::new(Cursor::new("trt  padded  \n"));
        assert_eq!(source.next_line().unwrap().as_deref(), Some("trt  padded  "));
    }

    #[test]
    fn test_buffered_source_reports_invalid_utf8() {
        let mut source = BufferedLineSource::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        assert!(source.next_line().is_err());
    }
}
