use std::io::{BufRead, Write};

use rustyline::{DefaultEditor, error::ReadlineError};
use tracing::debug;

use crate::{
    diagnostics::{ReckonError, Result},
    evaluator::evaluate,
    value::Number,
};

pub const BANNER: &str = "Enter calculation (<number> <operator> <number>), or 'exit' to quit:";
pub const PROMPT: &str = "> ";

/// What the driver should do with one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Exit,
    Output(String),
}

/// Handles a single input line: `exit` (surrounding whitespace ignored) ends
/// the session, anything else is evaluated verbatim.
pub fn respond(line: &str) -> Reply {
    if line.trim() == "exit" {
        return Reply::Exit;
    }
    match evaluate(line) {
        Ok(value) => Reply::Output(format!("Result: {}", Number(value))),
        Err(err) => Reply::Output(format!("Error: {err}")),
    }
}

/// Read-evaluate-print loop over any line-buffered reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    show_banner: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_banner: true,
        }
    }

    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Runs until end of input or an `exit` line. Returns how many lines
    /// were evaluated.
    pub fn run(&mut self) -> Result<usize> {
        debug!(banner = self.show_banner, "session started");
        if self.show_banner {
            writeln!(self.output, "{BANNER}")?;
        }

        let mut evaluated = 0;
        let mut buf = Vec::new();
        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            // Undecodable bytes become U+FFFD and fail as ordinary input.
            let line = String::from_utf8_lossy(&buf);
            match respond(strip_line_ending(&line)) {
                Reply::Exit => break,
                Reply::Output(text) => {
                    writeln!(self.output, "{text}")?;
                    evaluated += 1;
                }
            }
        }
        self.output.flush()?;
        debug!(evaluated, "session finished");
        Ok(evaluated)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Interactive loop with line editing and history, for terminals.
pub struct Repl {
    show_banner: bool,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

impl Repl {
    pub fn new() -> Self {
        Self { show_banner: true }
    }

    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    pub fn run(&mut self) -> Result<()> {
        let mut editor = DefaultEditor::new().map_err(readline_error)?;
        debug!(banner = self.show_banner, "interactive session started");
        if self.show_banner {
            println!("{BANNER}");
        }
        loop {
            match editor.readline(PROMPT) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        editor.add_history_entry(line.as_str()).ok();
                    }
                    match respond(&line) {
                        Reply::Exit => break,
                        Reply::Output(text) => println!("{text}"),
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(readline_error(err)),
            }
        }
        debug!("interactive session finished");
        Ok(())
    }
}

fn readline_error(err: ReadlineError) -> ReckonError {
    ReckonError::from(std::io::Error::new(std::io::ErrorKind::Other, err))
}
