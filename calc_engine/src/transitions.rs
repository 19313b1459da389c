/// Calculator Engine: Centralized Transition Logic
///
/// ALL state-mutation logic lives here. Handlers work on a clone, so the
/// caller's state is untouched when a command fails.

use crate::arithmetic::{apply_operation, canonical_numeral, parse_operand};
use crate::commands::Command;
use crate::domain::{CalculatorState, Operation, TransitionResult};
use crate::error::{CalcError, CalcResult};
use crate::invariants::is_valid_numeral;

// ---------------------------------------------------------------------------
// Public dispatcher
// ---------------------------------------------------------------------------

/// Apply `command` to `state` and return `(new_state, result)`.
///
/// On `Err` no new state is produced; the input state remains current.
pub fn apply_command(
    state: &CalculatorState,
    command: &Command,
) -> CalcResult<(CalculatorState, TransitionResult)> {
    let mut new_state = state.clone();

    let mut result = match *command {
        Command::Digit(d) => apply_digit(&mut new_state, d),
        Command::DecimalPoint => Ok(append_symbol(&mut new_state, '.')),
        Command::Operator(op) => apply_choose_operation(&mut new_state, op),
        Command::Equals => apply_compute(&mut new_state),
        Command::Delete => Ok(apply_delete_last(&mut new_state)),
        Command::Clear => Ok(apply_clear(&mut new_state)),
        Command::ToggleSign => Ok(apply_toggle_sign(&mut new_state)),
    }?;

    result.command = command.name().to_string();
    result.changed = new_state != *state;
    Ok((new_state, result))
}

// ---------------------------------------------------------------------------
// Individual transition handlers (private)
// ---------------------------------------------------------------------------

fn apply_digit(state: &mut CalculatorState, digit: u8) -> CalcResult<TransitionResult> {
    match char::from_digit(u32::from(digit), 10) {
        Some(symbol) => Ok(append_symbol(state, symbol)),
        None => Ok(no_op(format!("digit {} is not in 0-9", digit))),
    }
}

fn append_symbol(state: &mut CalculatorState, symbol: char) -> TransitionResult {
    if symbol == '.' && state.current_operand.contains('.') {
        return no_op("operand already has a decimal point".to_string());
    }

    // A fresh operand starts from "0" so a leading point becomes "0.".
    let base = if state.should_reset_screen {
        "0"
    } else {
        state.current_operand.as_str()
    };
    let candidate = if base == "0" && symbol != '.' {
        symbol.to_string()
    } else {
        format!("{}{}", base, symbol)
    };

    // Every typed operand must be exactly representable.
    if symbol != '.' && parse_operand(&candidate).is_none() {
        return no_op("operand is at full precision".to_string());
    }

    state.current_operand = candidate;
    state.should_reset_screen = false;
    TransitionResult::default()
}

fn apply_choose_operation(
    state: &mut CalculatorState,
    op: Operation,
) -> CalcResult<TransitionResult> {
    if state.current_operand == "0" {
        return Ok(no_op("no operand entered".to_string()));
    }

    let mut computed = false;
    if state.operation.is_some() && !state.previous_operand.is_empty() {
        computed = apply_compute(state)?.computed;
    }

    state.operation = Some(op);
    state.previous_operand = std::mem::replace(&mut state.current_operand, "0".to_string());
    state.should_reset_screen = false;

    Ok(TransitionResult {
        computed,
        ..Default::default()
    })
}

fn apply_compute(state: &mut CalculatorState) -> CalcResult<TransitionResult> {
    let Some(op) = state.operation else {
        return Ok(no_op("no pending operation".to_string()));
    };
    let (Some(lhs), Some(rhs)) = (
        parse_operand(&state.previous_operand),
        parse_operand(&state.current_operand),
    ) else {
        // A well-formed numeral that still does not parse is out of range.
        if is_valid_numeral(&state.previous_operand) && is_valid_numeral(&state.current_operand) {
            return Err(CalcError::Overflow { op });
        }
        return Ok(no_op("operand does not parse".to_string()));
    };

    let value = apply_operation(op, lhs, rhs)?;

    state.current_operand = canonical_numeral(value);
    state.operation = None;
    state.previous_operand.clear();
    state.should_reset_screen = true;

    Ok(TransitionResult {
        computed: true,
        ..Default::default()
    })
}

fn apply_delete_last(state: &mut CalculatorState) -> TransitionResult {
    if state.current_operand == "0" {
        return no_op("nothing to delete".to_string());
    }

    state.current_operand.pop();
    // A lone sign is not a numeral.
    if state.current_operand.is_empty() || state.current_operand == "-" {
        state.current_operand = "0".to_string();
    }

    TransitionResult::default()
}

fn apply_toggle_sign(state: &mut CalculatorState) -> TransitionResult {
    if state.current_operand == "0" {
        return no_op("zero has no sign".to_string());
    }
    // Entry is capped at full precision, so a typed operand always parses.
    let Some(value) = parse_operand(&state.current_operand) else {
        return no_op("operand does not parse".to_string());
    };

    state.current_operand = canonical_numeral(-value);
    TransitionResult::default()
}

fn apply_clear(state: &mut CalculatorState) -> TransitionResult {
    *state = CalculatorState::default();
    TransitionResult::default()
}

fn no_op(reason: String) -> TransitionResult {
    TransitionResult {
        reason,
        ..Default::default()
    }
}
