/// Calculator Engine: Command Definitions
///
/// Commands are pure data. They carry intent and payload only and contain
/// no transition logic.
///
/// Schema version is locked at 1. Envelopes with another schema version
/// are rejected by replay.

use serde::{Deserialize, Serialize};

use crate::domain::Operation;

/// Schema version for v1 command envelopes.
pub const SCHEMA_VERSION: u32 = 1;

/// One discrete input event: a key press or a button activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "value", rename_all = "snake_case")]
pub enum Command {
    Digit(u8),
    DecimalPoint,
    Operator(Operation),
    Equals,
    Delete,
    Clear,
    ToggleSign,
}

impl Command {
    /// Stable snake_case name, used in transition results and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Digit(_) => "digit",
            Command::DecimalPoint => "decimal_point",
            Command::Operator(_) => "operator",
            Command::Equals => "equals",
            Command::Delete => "delete",
            Command::Clear => "clear",
            Command::ToggleSign => "toggle_sign",
        }
    }
}

/// A command with its position in a session's tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEnvelope {
    pub sequence: u64,
    pub command: Command,
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl CommandEnvelope {
    pub fn new(sequence: u64, command: Command) -> Self {
        Self {
            sequence,
            command,
            schema_version: SCHEMA_VERSION,
        }
    }
}
