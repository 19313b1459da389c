/// Calculator Engine: Engine
///
/// Top-level dispatcher. Delegates mutation to transitions, validates via
/// invariants, and only stores a new state when the command succeeded.

use tracing::{debug, warn};

use crate::commands::Command;
use crate::domain::{CalculatorState, TransitionResult};
use crate::error::{CalcError, CalcResult};
use crate::invariants::validate_invariants;
use crate::state::create_initial_state;
use crate::transitions::apply_command;

/// Stateful engine wrapping the pure transition layer.
#[derive(Debug, Clone)]
pub struct CalcEngine {
    state: CalculatorState,
    applied: u64,
}

impl Default for CalcEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalcEngine {
    /// Create an engine showing `"0"`.
    pub fn new() -> Self {
        Self {
            state: create_initial_state(),
            applied: 0,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Number of commands applied successfully since the last reset.
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Reset to a fresh state.
    pub fn initialize_state(&mut self) -> &CalculatorState {
        self.state = create_initial_state();
        self.applied = 0;
        &self.state
    }

    /// Apply a single command:
    ///   1. Delegate to transitions::apply_command
    ///   2. Validate invariants on the new state
    ///   3. Store and return
    ///
    /// On error the stored state is left as it was and is returned
    /// alongside the error.
    pub fn dispatch(
        &mut self,
        command: Command,
    ) -> (&CalculatorState, CalcResult<TransitionResult>) {
        match apply_command(&self.state, &command) {
            Ok((new_state, result)) => {
                validate_invariants(&new_state);
                debug!(
                    command = command.name(),
                    changed = result.changed,
                    computed = result.computed,
                    reason = %result.reason,
                    current = %new_state.current_operand,
                    "command applied"
                );
                self.state = new_state;
                self.applied += 1;
                (&self.state, Ok(result))
            }
            Err(e) => {
                warn!(command = command.name(), error = %e, "command rejected");
                (&self.state, Err(e))
            }
        }
    }

    /// Apply an ordered sequence of commands.
    ///
    /// User-facing errors do not stop the sequence; each failed command
    /// leaves the state as it was, exactly as a person pressing keys would
    /// see. The errors are returned in order.
    pub fn apply_sequence(&mut self, commands: &[Command]) -> Vec<CalcError> {
        commands
            .iter()
            .filter_map(|c| self.dispatch(*c).1.err())
            .collect()
    }

    /// Reset and replay.
    pub fn replay(&mut self, commands: &[Command]) -> &CalculatorState {
        self.initialize_state();
        self.apply_sequence(commands);
        &self.state
    }
}
