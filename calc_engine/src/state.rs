/// Calculator Engine: State Construction

use crate::domain::CalculatorState;

/// Create a fresh calculator state: display `"0"`, nothing pending.
pub fn create_initial_state() -> CalculatorState {
    CalculatorState::default()
}
