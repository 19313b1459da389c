//! Session: one calculator with its tape and display.
//!
//! Apply-then-record order:
//!   1. engine.dispatch(command), which may reject with a user-facing error
//!   2. tape.record(command), always, so replay shows the same notices
//!   3. render both display regions

use calc_engine::commands::Command;
use calc_engine::display::{render, DisplayText};
use calc_engine::domain::{CalculatorState, TransitionResult};
use calc_engine::engine::CalcEngine;
use calc_engine::hashing::canonical_hash;
use tracing::info;

use crate::config::RuntimeConfig;
use crate::error::{RuntimeError, RuntimeResult};
use crate::keymap;
use crate::replay;
use crate::tape::CommandTape;

/// What the host UI needs after one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub sequence: u64,
    pub display: DisplayText,
    /// Blocking notice for the user, set when the engine rejected the command.
    pub notice: Option<String>,
    pub result: Option<TransitionResult>,
}

/// An isolated calculator session.
#[derive(Debug, Clone)]
pub struct Session {
    engine: CalcEngine,
    tape: CommandTape,
    group_separator: String,
}

impl Session {
    pub fn new(config: &RuntimeConfig) -> Self {
        Self {
            engine: CalcEngine::new(),
            tape: CommandTape::new(),
            group_separator: config.group_separator.clone(),
        }
    }

    /// Start a session by replaying a recorded tape.
    pub fn from_tape(tape: &CommandTape, config: &RuntimeConfig) -> RuntimeResult<Self> {
        // Reject unsupported schema versions before anything is applied.
        replay::check_schema_versions(tape.entries())?;

        let mut session = Self::new(config);
        for envelope in tape.entries() {
            session.apply(envelope.command);
        }
        info!(commands = tape.len(), "session restored from tape");
        Ok(session)
    }

    /// Dispatch one command, record it, and render.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let (_, result) = self.engine.dispatch(command);
        let envelope = self.tape.record(command);

        let (notice, result) = match result {
            Ok(r) => (None, Some(r)),
            Err(e) => (Some(e.to_string()), None),
        };

        Outcome {
            sequence: envelope.sequence,
            display: self.display(),
            notice,
            result,
        }
    }

    /// Press one key. Keys without a command produce no outcome.
    pub fn press(&mut self, key: &str) -> Option<Outcome> {
        keymap::command_for_key(key).map(|command| self.apply(command))
    }

    /// Press every key on a line, returning one outcome per mapped key.
    pub fn press_line(&mut self, line: &str) -> Vec<Outcome> {
        keymap::parse_keys(line)
            .into_iter()
            .map(|command| self.apply(command))
            .collect()
    }

    pub fn display(&self) -> DisplayText {
        render(self.engine.state(), &self.group_separator)
    }

    pub fn state(&self) -> &CalculatorState {
        self.engine.state()
    }

    pub fn tape(&self) -> &CommandTape {
        &self.tape
    }

    pub fn current_hash(&self) -> String {
        canonical_hash(self.engine.state())
    }

    /// Rebuild from the tape and check it lands on the live state.
    pub fn replay_full(&self) -> RuntimeResult<String> {
        let replayed = replay::verify_determinism(self.tape.entries())?;
        let live = self.current_hash();
        if replayed != live {
            return Err(RuntimeError::ReplayMismatch { live, replayed });
        }
        Ok(live)
    }
}
