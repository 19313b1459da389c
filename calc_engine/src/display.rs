//! Display formatting for the two calculator display regions.
//!
//! The integer part of a numeral is grouped in threes; the fractional part,
//! including a bare trailing point, is shown exactly as typed.

use serde::{Deserialize, Serialize};

use crate::domain::CalculatorState;

/// Default thousands separator.
pub const DEFAULT_GROUP_SEPARATOR: &str = ",";

/// Text for the upper (pending) and lower (current) display regions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DisplayText {
    pub previous: String,
    pub current: String,
}

/// Render both display regions from `state`.
pub fn render(state: &CalculatorState, separator: &str) -> DisplayText {
    let previous = match state.operation {
        Some(op) => format!(
            "{} {}",
            format_for_display(&state.previous_operand, separator),
            op
        ),
        None => String::new(),
    };

    DisplayText {
        previous,
        current: format_for_display(&state.current_operand, separator),
    }
}

/// Format one operand for display.
///
/// An integer part that is not a number (empty, a bare sign) renders as
/// nothing, but the fractional part is still shown.
pub fn format_for_display(value: &str, separator: &str) -> String {
    let (integer, fraction) = match value.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (value, None),
    };

    let integer_display = group_integer(integer, separator).unwrap_or_default();

    match fraction {
        Some(f) => format!("{}.{}", integer_display, f),
        None => integer_display,
    }
}

fn group_integer(integer: &str, separator: &str) -> Option<String> {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let digits = digits.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push_str(separator);
        }
        grouped.push(ch);
    }

    Some(format!("{}{}", sign, grouped))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operation;

    fn fmt(v: &str) -> String {
        format_for_display(v, DEFAULT_GROUP_SEPARATOR)
    }

    #[test]
    fn test_groups_integer_part() {
        assert_eq!(fmt("1234567"), "1,234,567");
        assert_eq!(fmt("123"), "123");
        assert_eq!(fmt("1000"), "1,000");
        assert_eq!(fmt("-987654"), "-987,654");
        assert_eq!(fmt("0"), "0");
    }

    #[test]
    fn test_fraction_is_verbatim() {
        assert_eq!(fmt("12."), "12.");
        assert_eq!(fmt("1234.5000"), "1,234.5000");
        assert_eq!(fmt("0.000001"), "0.000001");
        assert_eq!(fmt("-0."), "-0.");
    }

    #[test]
    fn test_non_numeric_integer_part_is_blank() {
        assert_eq!(fmt(""), "");
        assert_eq!(fmt(".5"), ".5");
        assert_eq!(fmt("-"), "");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(format_for_display("1234567.25", "\u{202f}"), "1\u{202f}234\u{202f}567.25");
        assert_eq!(format_for_display("1234567", ""), "1234567");
    }

    #[test]
    fn test_render_pending_operation() {
        let s = CalculatorState {
            previous_operand: "12500".to_string(),
            current_operand: "3.".to_string(),
            operation: Some(Operation::Divide),
            should_reset_screen: false,
        };
        let d = render(&s, DEFAULT_GROUP_SEPARATOR);
        assert_eq!(d.previous, "12,500 ÷");
        assert_eq!(d.current, "3.");
    }

    #[test]
    fn test_render_without_operation() {
        let d = render(&CalculatorState::default(), DEFAULT_GROUP_SEPARATOR);
        assert_eq!(d, DisplayText { previous: String::new(), current: "0".to_string() });
    }
}
