//! Runtime error type.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("Sequence violation on tape: expected {expected}, got {got}")]
    SequenceViolation { expected: u64, got: u64 },

    #[error("Unsupported schema version {got} at sequence {sequence} (expected {expected})")]
    SchemaVersion { sequence: u64, expected: u32, got: u32 },

    #[error("DETERMINISM FAILURE: two replays produced different hashes ({first} vs {second})")]
    Determinism { first: String, second: String },

    #[error("Replayed hash {replayed} does not match live hash {live}")]
    ReplayMismatch { live: String, replayed: String },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigValidation(String),

    #[error("Invalid tape script: {0}")]
    Script(#[from] serde_json::Error),
}

pub type RuntimeResult<T> = Result<T, RuntimeError>;
