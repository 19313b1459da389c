/// Calculator Engine: Invariant Checks
///
/// `validate_invariants` hard-fails: a violation means a transition is
/// broken, never that the user typed something odd.

use lazy_static::lazy_static;
use regex::Regex;

use crate::arithmetic::parse_operand;
use crate::domain::CalculatorState;

lazy_static! {
    /// Optional sign, at least one digit, at most one decimal point.
    static ref NUMERAL: Regex = Regex::new(r"^-?[0-9]+(\.[0-9]*)?$").unwrap();
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Run all checks. Panics on the first failure.
pub fn validate_invariants(state: &CalculatorState) {
    if let Err(msg) = check_invariants(state) {
        panic!("Invariant violation: {}", msg);
    }
}

/// Non-panicking variant of `validate_invariants`.
/// Returns `Err(message)` on the first failure.
pub fn check_invariants(state: &CalculatorState) -> Result<(), String> {
    check_current_operand_numeral(state)?;
    check_previous_operand_numeral(state)?;
    check_operands_representable(state)?;
    check_operation_has_operand(state)?;
    check_single_phase(state)?;
    Ok(())
}

/// Whether `text` is a numeral the entry rules may produce.
pub fn is_valid_numeral(text: &str) -> bool {
    NUMERAL.is_match(text)
}

// ---------------------------------------------------------------------------
// Individual checks (private)
// ---------------------------------------------------------------------------

fn check_current_operand_numeral(state: &CalculatorState) -> Result<(), String> {
    if !is_valid_numeral(&state.current_operand) {
        return Err(format!(
            "[INVARIANT:current_numeral] current_operand {:?} is not a decimal numeral",
            state.current_operand
        ));
    }
    Ok(())
}

fn check_previous_operand_numeral(state: &CalculatorState) -> Result<(), String> {
    if !state.previous_operand.is_empty() && !is_valid_numeral(&state.previous_operand) {
        return Err(format!(
            "[INVARIANT:previous_numeral] previous_operand {:?} is not a decimal numeral",
            state.previous_operand
        ));
    }
    Ok(())
}

fn check_operands_representable(state: &CalculatorState) -> Result<(), String> {
    for (name, text) in [
        ("current_operand", &state.current_operand),
        ("previous_operand", &state.previous_operand),
    ] {
        if !text.is_empty() && parse_operand(text).is_none() {
            return Err(format!(
                "[INVARIANT:representable] {} {:?} does not fit a Decimal exactly",
                name, text
            ));
        }
    }
    Ok(())
}

/// An operation is pending exactly when a left-hand operand is stored.
fn check_operation_has_operand(state: &CalculatorState) -> Result<(), String> {
    match (state.operation, state.previous_operand.is_empty()) {
        (Some(op), true) => Err(format!(
            "[INVARIANT:operation_operand] operation {} pending without previous_operand",
            op
        )),
        (None, false) => Err(format!(
            "[INVARIANT:operation_operand] previous_operand {:?} stored without an operation",
            state.previous_operand
        )),
        _ => Ok(()),
    }
}

fn check_single_phase(state: &CalculatorState) -> Result<(), String> {
    if state.should_reset_screen && state.operation.is_some() {
        return Err(
            "[INVARIANT:single_phase] result shown while an operation is pending".to_string(),
        );
    }
    Ok(())
}
