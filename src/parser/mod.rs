//! JSON input acquisition and parsing

use std::io::Read;
use std::path::PathBuf;

use serde_json::Value;

use crate::error::{ParseError, ParseResult};

/// Source of the JSON document to normalize
#[derive(Debug, Clone)]
pub enum JsonSource {
    /// Raw JSON string input
    String(String),
    /// Single JSON file path
    File(PathBuf),
    /// Standard input stream, read to end-of-stream
    Stdin,
}

impl JsonSource {
    /// Parse one JSON document from this source
    pub fn parse(&self) -> ParseResult<Value> {
        match self {
            JsonSource::String(content) => parse_from_string(content),
            JsonSource::File(path) => parse_from_file(path),
            JsonSource::Stdin => parse_from_stdin(),
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            JsonSource::String(_) => "string input".to_string(),
            JsonSource::File(path) => format!("file: {}", path.display()),
            JsonSource::Stdin => "standard input".to_string(),
        }
    }
}

/// Parse JSON from a string
fn parse_from_string(content: &str) -> ParseResult<Value> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ParseError::new("empty JSON input".to_string(), None));
    }

    parse_document(trimmed)
}

/// Parse JSON from a file
fn parse_from_file(path: &PathBuf) -> ParseResult<Value> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ParseError::new(format!("failed to read {}: {}", path.display(), e), None)
    })?;

    parse_from_string(&content)
}

/// Parse JSON from standard input
///
/// The stream is consumed in one scoped read to end-of-stream; there is no
/// incremental parsing.
fn parse_from_stdin() -> ParseResult<Value> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ParseError::new(format!("failed to read standard input: {}", e), None))?;

    parse_from_string(&buffer)
}

#[cfg(not(feature = "simd"))]
fn parse_document(content: &str) -> ParseResult<Value> {
    serde_json::from_str(content).map_err(|e| {
        let location = error_location(&e);
        let mut err = ParseError::new(format!("invalid JSON: {}", e), location);
        if let Some(preview) = error_preview(content, location) {
            err = err.with_preview(preview);
        }
        err
    })
}

#[cfg(feature = "simd")]
fn parse_document(content: &str) -> ParseResult<Value> {
    let mut bytes = content.as_bytes().to_vec();
    simd_json::serde::from_slice(&mut bytes)
        .map_err(|e| ParseError::new(format!("invalid JSON: {}", e), None))
}

/// Extract the (line, column) of a syntax error; zero line means unavailable
#[cfg(not(feature = "simd"))]
fn error_location(error: &serde_json::Error) -> Option<(usize, usize)> {
    match (error.line(), error.column()) {
        (0, _) => None,
        (line, column) => Some((line, column)),
    }
}

/// Render the offending source line with a caret under the error column
#[cfg(not(feature = "simd"))]
fn error_preview(content: &str, location: Option<(usize, usize)>) -> Option<String> {
    let (line, column) = location?;
    let text = content.lines().nth(line.checked_sub(1)?)?;
    let caret_offset = column.saturating_sub(1).min(text.len());
    Some(format!("{}\n{}^", text, " ".repeat(caret_offset)))
}
