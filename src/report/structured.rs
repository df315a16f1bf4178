//! Structured output formats for content reports.
//!
//! This module provides JSON serialization for reports and enhancements,
//! enabling the store to ingest them directly.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during JSON output operations.
#[derive(Error, Debug)]
pub enum JsonOutputError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for JSON output operations.
pub type JsonOutputResult<T> = Result<T, JsonOutputError>;

/// Writer for JSON-formatted output.
///
/// Works for anything serializable: a [`super::ContentReport`], a single
/// [`crate::model::Enhancement`], or a list of either.
pub struct JsonReportWriter;

impl JsonReportWriter {
    /// Write a value to a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use content_quality::report::{ContentReport, JsonReportWriter};
    ///
    /// let report = ContentReport::new(Vec::new());
    /// JsonReportWriter::write_to_file(&report, "content-report.json").unwrap();
    /// ```
    pub fn write_to_file<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> JsonOutputResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        let json = serde_json::to_string_pretty(value)?;
        writer.write_all(json.as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Serialize a value to a pretty-printed JSON string.
    pub fn to_json_string<T: Serialize>(value: &T) -> JsonOutputResult<String> {
        let json = serde_json::to_string_pretty(value)?;
        Ok(json)
    }

    /// Serialize a value to a compact JSON string (no whitespace).
    pub fn to_json_compact<T: Serialize>(value: &T) -> JsonOutputResult<String> {
        let json = serde_json::to_string(value)?;
        Ok(json)
    }
}
