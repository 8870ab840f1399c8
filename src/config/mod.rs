//! Environment-derived output configuration
//!
//! The output directory comes from the process environment exactly once, at
//! startup; everything downstream receives it as an explicit value.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Name of the environment variable holding the output directory
pub const OUTPUT_DIR_VAR: &str = "OUTPUT_DIRECTORY";

/// Resolved runtime settings for one invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Directory the result file is written into
    pub output_dir: PathBuf,
}

impl Settings {
    /// Read settings from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read settings through an injected lookup.
    ///
    /// Lets tests resolve settings without mutating the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(OUTPUT_DIR_VAR).ok_or(ConfigError::Missing {
            var: OUTPUT_DIR_VAR,
        })?;

        if raw.trim().is_empty() {
            return Err(ConfigError::Empty {
                var: OUTPUT_DIR_VAR,
            });
        }

        Ok(Self {
            output_dir: PathBuf::from(raw),
        })
    }
}
