//! All error types for the resxscan crate.
//!
//! These are returned from all fallible operations (scanning, parsing, aggregation, settings I/O).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unsupported locale `{locale}` in {}", .file.display())]
    UnsupportedLocale { locale: String, file: PathBuf },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Creates a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Error::NotFound(message.into())
    }

    /// Creates a new parse error
    pub fn parse_error(message: impl Into<String>) -> Self {
        Error::Parse(message.into())
    }
}
