//! Tagged line output.
//!
//! Every demo line goes through a [`Console`] as `[<tag>] <text>`. The binary
//! writes to stdout; tests capture into a [`MemoryConsole`].

use std::io::{Write, stdout};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;

pub trait Console: Send + Sync {
    /// Write one line of demo output.
    fn emit(&self, text: &str);
}

#[must_use]
pub fn format_line(tag: &str, text: &str) -> String {
    format!("[{tag}] {text}")
}

/// Compact JSON rendering used for values embedded in a line.
pub fn render<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

#[derive(Debug, Clone)]
pub struct StdoutConsole {
    tag: String,
}

impl StdoutConsole {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Console for StdoutConsole {
    fn emit(&self, text: &str) {
        let mut out = stdout().lock();
        if let Err(err) = writeln!(out, "{}", format_line(&self.tag, text)) {
            tracing::warn!("Failed to write to stdout: {err}");
        }
    }
}

/// Collects formatted lines in memory.
#[derive(Debug, Default)]
pub struct MemoryConsole {
    tag: String,
    lines: Mutex<Vec<String>>,
}

impl MemoryConsole {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            lines: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything emitted so far.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Emitted lines with the `[tag] ` prefix stripped.
    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        let prefix = format_line(&self.tag, "");
        self.lines()
            .into_iter()
            .map(|line| {
                line.strip_prefix(&prefix)
                    .map_or_else(|| line.clone(), str::to_string)
            })
            .collect()
    }

    /// Number of lines whose text equals `text` exactly.
    #[must_use]
    pub fn count(&self, text: &str) -> usize {
        self.texts().iter().filter(|line| *line == text).count()
    }
}

impl Console for MemoryConsole {
    fn emit(&self, text: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(format_line(&self.tag, text));
    }
}
