use std::io::{self, Stderr, Stdout, Write};

use super::command::{Command, parse_line};
use super::env::Environment;
use super::file::{self, FileTarget};
use super::ui;
use crate::error::ShellError;
use crate::fs::write_file;
use crate::input::LineSource;
use crate::translation::{TranslationEngine, TranslationRequest, TranslationResponse};
use crate::ui::{Spinner, Style};

/// Longest text, in bytes, accepted by `trt`.
pub const MAX_TEXT_LENGTH: usize = 5000;

/// An interactive translation shell.
///
/// Owns the session environment and the engine handle. Results are written to
/// `out`, diagnostics and help to `err`.
pub struct Shell<E, O = Stdout, W = Stderr> {
    env: Environment,
    engine: E,
    out: O,
    err: W,
    show_progress: bool,
}

impl<E: TranslationEngine> Shell<E> {
    /// Creates a shell writing to the process stdout and stderr.
    pub fn new(engine: E, env: Environment) -> Self {
        Self {
            env,
            engine,
            out: io::stdout(),
            err: io::stderr(),
            show_progress: true,
        }
    }
}

impl<E: TranslationEngine, O: Write, W: Write> Shell<E, O, W> {
    /// Creates a shell with caller-provided output streams and no spinner.
    pub fn with_output(engine: E, env: Environment, out: O, err: W) -> Self {
        Self {
            env,
            engine,
            out,
            err,
            show_progress: false,
        }
    }

    pub const fn env(&self) -> &Environment {
        &self.env
    }

    pub const fn engine(&self) -> &E {
        &self.engine
    }

    pub const fn output(&self) -> &O {
        &self.out
    }

    pub const fn errors(&self) -> &W {
        &self.err
    }

    /// Reads and dispatches lines until `input` reports end of input.
    ///
    /// Read errors are reported and the loop keeps going. `input` is dropped
    /// on return.
    pub async fn run<L: LineSource>(&mut self, mut input: L) {
        loop {
            match input.next_line() {
                Ok(Some(line)) => self.dispatch(&line).await,
                Ok(None) => break,
                Err(e) => self.report(&ShellError::LineInput(e)),
            }
        }
    }

    /// Runs a single input line.
    pub async fn dispatch(&mut self, line: &str) {
        let result = match parse_line(line) {
            Command::Set(pairs) => {
                self.set(&pairs);
                Ok(())
            }
            Command::Get(key) => self.get(key),
            Command::TranslateText(text) => self.translate_text(text).await,
            Command::TranslateFile(args) => self.translate_file(args).await,
            Command::Help => self.help(),
            Command::Empty => Ok(()),
            Command::Invalid => {
                self.report(&ShellError::UnknownCommand);
                self.help()
            }
        };

        if let Err(e) = result {
            self.report(&e);
        }
    }

    fn set(&mut self, pairs: &[&str]) {
        for pair in pairs {
            if let Err(e) = self.env.set_pair(pair) {
                self.report(&e);
            }
        }
    }

    fn get(&mut self, key: &str) -> Result<(), ShellError> {
        match self.env.get(key) {
            Some(value) => writeln!(self.out, "= {value}")?,
            None => writeln!(self.out, "(nil)")?,
        }
        Ok(())
    }

    fn help(&mut self) -> Result<(), ShellError> {
        ui::write_help(&mut self.err)?;
        Ok(())
    }

    async fn translate_text(&mut self, text: &str) -> Result<(), ShellError> {
        if text.len() > MAX_TEXT_LENGTH {
            return Err(ShellError::TextTooLong(text.len()));
        }
        self.env.validate()?;

        let request = TranslationRequest::new(text, self.env.source(), self.env.target());
        let response = self.translate(&request).await?;

        writeln!(self.out, "{}", ui::format_translation_header(&request, &response))?;
        writeln!(self.out, "{}", response.text)?;
        Ok(())
    }

    async fn translate_file(&mut self, args: &str) -> Result<(), ShellError> {
        self.env.validate()?;

        let target = FileTarget::parse(args);
        let text = file::load_text(target.source)?;

        let request = TranslationRequest::new(text, self.env.source(), self.env.target());
        let response = self.translate(&request).await?;

        writeln!(self.out, "{}", ui::format_translation_header(&request, &response))?;

        if target.to_stdout() {
            writeln!(self.out, "{}", response.text)?;
            return Ok(());
        }

        write_file(&*target.destination, &response.text).map_err(|source| {
            ShellError::WriteOutput {
                path: target.destination.to_string(),
                source,
            }
        })?;
        writeln!(
            self.err,
            "{} Wrote {}",
            Style::success("✓"),
            target.destination
        )?;
        Ok(())
    }

    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResponse, ShellError> {
        let spinner = self.show_progress.then(|| Spinner::new("Translating..."));
        let result = self.engine.translate(request).await;
        drop(spinner);
        result.map_err(ShellError::Engine)
    }

    fn report(&mut self, error: &ShellError) {
        let _ = writeln!(self.err, "{} {error}", Style::error("Error:"));
    }
}
