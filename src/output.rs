//! Terminal output for one CLI invocation.
//!
//! An [`Output`] is created in `main` and handed down to the command handlers;
//! nothing in the crate writes to stdout or stderr directly.

use color_print::cformat;
use std::io::{self, IsTerminal, Write};

pub struct Output {
    out: Box<dyn Write>,
    err: Box<dyn Write>,
    color: bool,
}

impl Output {
    pub fn new(out: Box<dyn Write>, err: Box<dyn Write>, color: bool) -> Self {
        Self { out, err, color }
    }

    /// Standard streams, colored when stdout is a terminal
    pub fn stdio() -> Self {
        let color = io::stdout().is_terminal();
        Self::new(Box::new(io::stdout()), Box::new(io::stderr()), color)
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text.trim_end_matches('\n'))
    }

    pub fn success(&mut self, message: &str) -> io::Result<()> {
        let line = if self.color {
            cformat!("<green>✓ {}</green>", message)
        } else {
            format!("✓ {}", message)
        };
        writeln!(self.out, "{}", line)
    }

    pub fn warning(&mut self, message: &str) -> io::Result<()> {
        let line = if self.color {
            cformat!("<yellow>{}</yellow>", message)
        } else {
            message.to_string()
        };
        writeln!(self.out, "{}", line)
    }

    /// Failures go to stderr
    pub fn failure(&mut self, message: &str) -> io::Result<()> {
        let line = if self.color {
            cformat!("<red>✗ {}</red>", message)
        } else {
            format!("✗ {}", message)
        };
        writeln!(self.err, "{}", line)
    }

    /// One log entry: dimmed timestamp, then the message
    pub fn log_line(&mut self, timestamp: &str, message: &str) -> io::Result<()> {
        if self.color {
            writeln!(self.out, "{} {}", cformat!("<dim>{}</dim>", timestamp), message)
        } else {
            writeln!(self.out, "{} {}", timestamp, message)
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()?;
        self.err.flush()
    }
}
