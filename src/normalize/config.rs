//! Configuration options for JSON flattening

use serde::{Deserialize, Serialize};

/// Normalization configuration options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizeConfig {
    /// Separator joining path segments into column names
    pub separator: char,
    /// Maximum nesting depth before normalization is aborted
    pub max_depth: usize,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            separator: '.',
            max_depth: 128,
        }
    }
}

impl NormalizeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
