/// Calculator Engine: Core Domain Types
///
/// Pure data. No transition logic.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Core Domain Types ──────────────────────────────────────────────

/// A binary operator that can be pending between two operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operation {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×", alias = "*", alias = "x")]
    Multiply,
    #[serde(rename = "÷", alias = "/")]
    Divide,
}

impl Operation {
    /// Display symbol, as shown next to the previous operand.
    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which of the three entry phases the calculator is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    EnteringFirstOperand,
    EnteringSecondOperand,
    ResultShown,
}

/// Complete calculator state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorState {
    /// Empty when no left-hand operand is pending.
    pub previous_operand: String,
    pub current_operand: String,
    pub operation: Option<Operation>,
    pub should_reset_screen: bool,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            previous_operand: String::new(),
            current_operand: "0".to_string(),
            operation: None,
            should_reset_screen: false,
        }
    }
}

impl CalculatorState {
    pub fn phase(&self) -> Phase {
        if self.operation.is_some() {
            Phase::EnteringSecondOperand
        } else if self.should_reset_screen {
            Phase::ResultShown
        } else {
            Phase::EnteringFirstOperand
        }
    }

    /// True when the state equals a freshly cleared calculator.
    pub fn is_cleared(&self) -> bool {
        *self == Self::default()
    }
}

/// Structured outcome of a successful command application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransitionResult {
    pub command: String,
    /// The state differs from the one the command was applied to.
    pub changed: bool,
    /// A computation ran, either from `equals` or chained from an operator.
    pub computed: bool,
    /// Why the command was a no-op, if it was.
    pub reason: String,
}

impl Default for TransitionResult {
    fn default() -> Self {
        Self {
            command: String::new(),
            changed: false,
            computed: false,
            reason: String::new(),
        }
    }
}
