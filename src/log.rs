// src/log.rs
//! Leveled, color-coded log lines.

#![deny(missing_docs)]

use crate::config::{ColorChoice, Config};
use colored::{Color, Colorize};
use std::cell::RefCell;
use std::io::{self, Write};

/// Component tag opening every line.
pub const TAG: &str = "mock_generator: ";

/// Severity of a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Plain, uncolored.
    Debug,
    /// Blue.
    Info,
    /// Green.
    Success,
    /// Yellow.
    Warn,
    /// Red. The caller is expected to terminate after logging it.
    Fatal,
}

impl Level {
    /// Message color, `None` for plain lines.
    pub const fn color(self) -> Option<Color> {
        match self {
            Level::Debug => None,
            Level::Info => Some(Color::Blue),
            Level::Success => Some(Color::Green),
            Level::Warn => Some(Color::Yellow),
            Level::Fatal => Some(Color::Red),
        }
    }
}

impl ColorChoice {
    /// Install this policy as `colored`'s process-wide override.
    pub fn apply(self) {
        match self {
            ColorChoice::Always => colored::control::set_override(true),
            ColorChoice::Never => colored::control::set_override(false),
            ColorChoice::Auto => colored::control::unset_override(),
        }
    }
}

/// Writes formatted lines to a single sink.
///
/// Logging never exits the process, not even at [`Level::Fatal`]; the
/// binary decides the exit status.
pub struct Logger {
    sink: RefCell<Box<dyn Write>>,
    color: bool,
    timestamps: bool,
}

impl Logger {
    /// Logger over an arbitrary writer.
    pub fn new(sink: impl Write + 'static, color: bool, timestamps: bool) -> Self {
        Self {
            sink: RefCell::new(Box::new(sink)),
            color,
            timestamps,
        }
    }

    /// Logger on stderr, configured from `cfg`.
    ///
    /// Installs the color policy globally; under `auto`, `colored` decides
    /// from `NO_COLOR`, `CLICOLOR` and the terminal.
    pub fn stderr(cfg: &Config) -> Self {
        cfg.color.apply();
        Self::new(io::stderr(), cfg.color != ColorChoice::Never, cfg.timestamps)
    }

    /// Render one line, without the trailing newline.
    pub fn format(&self, level: Level, msg: &str) -> String {
        let mut line = String::new();
        if self.timestamps {
            line.push_str(&chrono::Local::now().format("%Y/%m/%d %H:%M:%S ").to_string());
        }
        if !self.color {
            line.push_str(TAG);
            line.push_str(msg);
            return line;
        }
        line.push_str(&TAG.cyan().to_string());
        match level.color() {
            Some(color) => line.push_str(&msg.color(color).to_string()),
            None => line.push_str(msg),
        }
        line
    }

    /// Write one line. Sink errors are dropped.
    pub fn log(&self, level: Level, msg: &str) {
        let line = self.format(level, msg);
        let mut sink = self.sink.borrow_mut();
        let _ = writeln!(sink, "{line}");
        let _ = sink.flush();
    }

    /// Log at [`Level::Success`].
    pub fn success(&self, msg: &str) {
        self.log(Level::Success, msg);
    }

    /// Log at [`Level::Warn`].
    pub fn warn(&self, msg: &str) {
        self.log(Level::Warn, msg);
    }

    /// Log at [`Level::Fatal`].
    pub fn fatal(&self, msg: &str) {
        self.log(Level::Fatal, msg);
    }
}
