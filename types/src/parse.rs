use serde_json::Value;
use thiserror::Error;

/// Structured text that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at line {line} column {column}")]
pub struct ParseError {
    message: String,
    line: usize,
    column: usize,
}

impl ParseError {
    /// Parser message without the position suffix.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 1-based line of the failure.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of the failure.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        // serde_json's Display appends " at line L column C"; keep only the reason.
        let full = err.to_string();
        let suffix = format!(" at line {} column {}", err.line(), err.column());
        let message = full
            .strip_suffix(&suffix)
            .map_or_else(|| full.clone(), str::to_string);
        Self {
            message,
            line: err.line(),
            column: err.column(),
        }
    }
}

/// Parse `text` as JSON.
pub fn parse_structured(text: &str) -> Result<Value, ParseError> {
    Ok(serde_json::from_str(text)?)
}
