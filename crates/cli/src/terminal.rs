//! Line-oriented console I/O
//!
//! The shell never touches stdin/stdout directly; it talks through a
//! `Terminal` so tests can drive it with in-memory buffers.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use console::style;
use roster_domain::Performance;

/// Input, output and error streams of one shell session
pub struct Terminal<I, O, E> {
    input: I,
    out: O,
    err: E,
    styled_out: bool,
    styled_err: bool,
}

impl<I: BufRead, O: Write, E: Write> Terminal<I, O, E> {
    pub fn new(input: I, out: O, err: E) -> Self {
        Self {
            input,
            out,
            err,
            styled_out: false,
            styled_err: false,
        }
    }

    /// Builder: allow colors on the output and error streams separately
    ///
    /// Colors are still subject to `console`'s own checks (`NO_COLOR`, tty).
    pub fn with_style(mut self, out: bool, err: bool) -> Self {
        self.styled_out = out;
        self.styled_err = err;
        self
    }

    /// Print text without a newline and flush so it shows before input
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Print one line to the output stream
    pub fn say(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print one `Error: ...` line to the error stream
    pub fn report_error(&mut self, message: impl Display) -> io::Result<()> {
        if self.styled_err {
            let prefix = style("Error:").for_stderr().red().bold();
            writeln!(self.err, "{} {}", prefix, message)
        } else {
            writeln!(self.err, "Error: {}", message)
        }
    }

    /// Print an arbitrary line to the error stream
    pub fn warn(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.err, "{}", text)
    }

    /// Read one line without its terminator; `None` at end of input
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Direct access to the output stream (for record display)
    pub fn out(&mut self) -> &mut O {
        &mut self.out
    }

    /// Render a performance label, colored when styling is on
    pub fn performance_label(&self, performance: Performance) -> String {
        if !self.styled_out {
            return performance.label().to_string();
        }

        let label = style(performance.label());
        let colored = match performance {
            Performance::Excellent => label.green(),
            Performance::Good => label.cyan(),
            Performance::Satisfactory => label.yellow(),
            Performance::Unsatisfactory => label.red(),
        };
        colored.to_string()
    }

    /// Take the streams back (used by tests to inspect output)
    pub fn into_parts(self) -> (I, O, E) {
        (self.input, self.out, self.err)
    }
}
