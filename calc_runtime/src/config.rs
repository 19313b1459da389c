//! Runtime configuration.
//!
//! ```toml
//! group_separator = ","
//! log_filter = "warn"
//! show_hash = false
//! ```
//!
//! Every field is optional; missing fields fall back to the
//! defaults below. Values that are present must be valid.

use std::fs;
use std::path::Path;

use calc_engine::display::DEFAULT_GROUP_SEPARATOR;
use serde::{Deserialize, Serialize};

use crate::error::{RuntimeError, RuntimeResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuntimeConfig {
    /// Thousands separator for the integer part of displayed numbers.
    #[serde(default = "default_group_separator")]
    pub group_separator: String,

    /// `tracing` filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Print the canonical state hash after each line.
    #[serde(default)]
    pub show_hash: bool,
}

fn default_group_separator() -> String {
    DEFAULT_GROUP_SEPARATOR.to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            group_separator: default_group_separator(),
            log_filter: default_log_filter(),
            show_hash: false,
        }
    }
}

impl RuntimeConfig {
    /// Load and validate a TOML config file.
    pub fn from_file(path: &Path) -> RuntimeResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| RuntimeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| RuntimeError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> RuntimeResult<Self> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// A separator containing digits, a decimal point or a sign would
    /// make the display ambiguous.
    pub fn validate(&self) -> RuntimeResult<()> {
        if self
            .group_separator
            .chars()
            .any(|c| c.is_ascii_digit() || c == '.' || c == '-')
        {
            return Err(RuntimeError::ConfigValidation(format!(
                "group_separator {:?} must not contain digits, '.' or '-'",
                self.group_separator
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(RuntimeError::ConfigValidation(
                "log_filter must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
