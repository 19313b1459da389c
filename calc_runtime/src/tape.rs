//! Append-only command tape.
//!
//! Rules:
//!   - Strict append only, no mutation, no deletion, no reordering
//!   - Sequence strictly increasing from 1, no gaps (validated on append)
//!   - Scripts are JSON arrays of envelopes

use std::fs;
use std::path::Path;

use calc_engine::commands::{Command, CommandEnvelope};

use crate::error::{RuntimeError, RuntimeResult};

/// Ordered in-memory log of the commands a session received.
#[derive(Debug, Clone, Default)]
pub struct CommandTape {
    entries: Vec<CommandEnvelope>,
}

impl CommandTape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tape from envelopes, validating their order.
    pub fn from_envelopes(envelopes: Vec<CommandEnvelope>) -> RuntimeResult<Self> {
        let mut tape = Self::new();
        for envelope in envelopes {
            tape.append(envelope)?;
        }
        Ok(tape)
    }

    /// Parse a JSON tape script.
    pub fn from_json(json: &str) -> RuntimeResult<Self> {
        let envelopes: Vec<CommandEnvelope> = serde_json::from_str(json)?;
        Self::from_envelopes(envelopes)
    }

    /// Load a JSON tape script from disk.
    pub fn load(path: &Path) -> RuntimeResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| RuntimeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Append an envelope. Its sequence must be exactly one past the last.
    pub fn append(&mut self, envelope: CommandEnvelope) -> RuntimeResult<()> {
        let expected = self.last_sequence() + 1;
        if envelope.sequence != expected {
            return Err(RuntimeError::SequenceViolation {
                expected,
                got: envelope.sequence,
            });
        }
        self.entries.push(envelope);
        Ok(())
    }

    /// Wrap `command` in the next envelope and append it.
    pub fn record(&mut self, command: Command) -> CommandEnvelope {
        let envelope = CommandEnvelope::new(self.last_sequence() + 1, command);
        self.entries.push(envelope);
        envelope
    }

    pub fn entries(&self) -> &[CommandEnvelope] {
        &self.entries
    }

    /// Sequence of the last entry, or 0 for an empty tape.
    pub fn last_sequence(&self) -> u64 {
        self.entries.last().map(|e| e.sequence).unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Pretty JSON script of the tape.
    pub fn to_json(&self) -> RuntimeResult<String> {
        Ok(serde_json::to_string_pretty(&self.entries)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_assigns_sequences() {
        let mut tape = CommandTape::new();
        assert_eq!(tape.record(Command::Digit(1)).sequence, 1);
        assert_eq!(tape.record(Command::Equals).sequence, 2);
        assert_eq!(tape.last_sequence(), 2);
        assert_eq!(tape.len(), 2);
    }

    #[test]
    fn test_append_rejects_gap() {
        let mut tape = CommandTape::new();
        tape.append(CommandEnvelope::new(1, Command::Digit(1))).unwrap();
        let err = tape
            .append(CommandEnvelope::new(3, Command::Digit(2)))
            .unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::SequenceViolation { expected: 2, got: 3 }
        ));
        assert_eq!(tape.len(), 1);
    }

    #[test]
    fn test_json_script_round_trip() {
        let mut tape = CommandTape::new();
        tape.record(Command::Digit(4));
        tape.record(Command::ToggleSign);
        let json = tape.to_json().unwrap();
        let loaded = CommandTape::from_json(&json).unwrap();
        assert_eq!(loaded.entries(), tape.entries());
    }

    #[test]
    fn test_bad_script_is_error() {
        assert!(matches!(
            CommandTape::from_json("{not json"),
            Err(RuntimeError::Script(_))
        ));
    }
}
