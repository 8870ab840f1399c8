//! Error types and handling infrastructure for the flattening pipeline

use std::fmt;
use std::path::PathBuf;

use crate::normalize::table::ValueKind;

/// Configuration errors (environment resolution)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("environment variable {var} is not set")]
    Missing { var: &'static str },

    #[error("environment variable {var} is set but empty")]
    Empty { var: &'static str },
}

/// Input errors: stdin I/O failures and malformed JSON
///
/// Both are terminal and exit with the same code, but stay distinguishable
/// from shape errors reported by the normalizer.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
    pub input_preview: Option<String>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            location,
            input_preview: None,
        }
    }

    pub fn with_preview(mut self, preview: String) -> Self {
        self.input_preview = Some(preview);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Shape errors reported by the normalizer
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("unsupported top-level JSON shape: expected an object or an array of objects, found {found}")]
    UnsupportedTopLevel { found: ValueKind },

    #[error("record {index} is not an object: found {found}")]
    InvalidRecord { index: usize, found: ValueKind },

    #[error("nesting depth exceeds the configured limit of {limit}")]
    DepthExceeded { limit: usize },
}

/// Output errors: result-file I/O and CSV serialization failures
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV serialization failed: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },
}

impl OutputError {
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io { path, source }
    }
}

impl From<csv::Error> for OutputError {
    fn from(source: csv::Error) -> Self {
        Self::Csv { source }
    }
}

/// Top-level error for one pipeline invocation
///
/// Every variant is terminal: the process reports the error on stderr and
/// exits with the matching code. No fallback table is ever substituted.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl PipelineError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) => 1,
            Self::Parse(_) => 2,
            Self::Shape(_) => 3,
            Self::Output(_) => 4,
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(err) => format!("configuration error: {}", err),
            Self::Parse(err) => match &err.input_preview {
                Some(preview) => format!("input error: {}\n{}", err, preview),
                None => format!("input error: {}", err),
            },
            Self::Shape(err) => format!("shape error: {}", err),
            Self::Output(err) => format!("output error: {}", err),
        }
    }
}

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Result type for a whole pipeline invocation
pub type PipelineResult<T> = Result<T, PipelineError>;
