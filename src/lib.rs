//! jsontab — flatten nested JSON documents into delimited tables
//!
//! Reads one JSON document, flattens nested objects and arrays into a flat
//! table with one column per leaf path (path segments dot-joined, array
//! indices as decimal segments), and serializes the result as an RFC 4180
//! CSV file.

pub mod config;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod writer;

// Re-export commonly used types
pub use config::Settings;
pub use error::{ConfigError, OutputError, ParseError, PipelineError, ShapeError};
pub use normalize::{normalize_value, Cell, NormalizeConfig, Normalizer, Table, ValueKind};
pub use parser::JsonSource;
pub use writer::CsvSink;

/// Flatten a parsed JSON document with the default configuration
pub fn normalize_json(value: &serde_json::Value) -> Result<Table, ShapeError> {
    normalize_value(value, &NormalizeConfig::default())
}

/// Flatten a parsed JSON document with a custom configuration
pub fn normalize_json_with_config(
    value: &serde_json::Value,
    config: &NormalizeConfig,
) -> Result<Table, ShapeError> {
    normalize_value(value, config)
}
