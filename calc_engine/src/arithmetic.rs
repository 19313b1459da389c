/// Calculator Engine: Arithmetic Primitives
///
/// Operands travel as text and are parsed into `Decimal` only when an
/// operation needs their value. All arithmetic is checked.

use rust_decimal::Decimal;

use crate::domain::Operation;
use crate::error::CalcError;

/// Parse an operand string into a decimal value.
///
/// Accepts the shapes the entry rules can produce: `"7"`, `"-7"`,
/// `"12."`, `"0.5"`. A trailing decimal point is ignored. Returns `None`
/// for empty input, a bare sign, or anything `Decimal` cannot hold
/// exactly: more than 28 fractional digits, or more significant digits
/// than its 96-bit mantissa. Nothing is ever rounded on the way in.
pub fn parse_operand(text: &str) -> Option<Decimal> {
    let trimmed = text.strip_suffix('.').unwrap_or(text);
    let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if digits.is_empty() || digits.starts_with('.') {
        return None;
    }
    Decimal::from_str_exact(trimmed).ok()
}

/// Canonical text form of a computed value.
///
/// Trailing fractional zeros are stripped and zero is always `"0"`.
pub fn canonical_numeral(value: Decimal) -> String {
    if value.is_zero() {
        return "0".to_string();
    }
    value.normalize().to_string()
}

/// Apply `op` to `lhs` and `rhs`.
///
/// Division by zero is reported before any arithmetic happens. Results
/// outside the representable range are reported as overflow.
pub fn apply_operation(op: Operation, lhs: Decimal, rhs: Decimal) -> Result<Decimal, CalcError> {
    let result = match op {
        Operation::Add => lhs.checked_add(rhs),
        Operation::Subtract => lhs.checked_sub(rhs),
        Operation::Multiply => lhs.checked_mul(rhs),
        Operation::Divide => {
            if rhs.is_zero() {
                return Err(CalcError::DivisionByZero);
            }
            lhs.checked_div(rhs)
        }
    };
    result.ok_or(CalcError::Overflow { op })
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_parse_operand_accepts_entry_shapes() {
        assert_eq!(parse_operand("7"), Some(dec("7")));
        assert_eq!(parse_operand("-7"), Some(dec("-7")));
        assert_eq!(parse_operand("12."), Some(dec("12")));
        assert_eq!(parse_operand("0.25"), Some(dec("0.25")));
        assert!(parse_operand("-0.").unwrap().is_zero());
    }

    #[test]
    fn test_parse_operand_rejects_malformed() {
        assert_eq!(parse_operand(""), None);
        assert_eq!(parse_operand("-"), None);
        assert_eq!(parse_operand("."), None);
        assert_eq!(parse_operand("abc"), None);
    }

    #[test]
    fn test_parse_operand_never_rounds() {
        // 28 fractional digits is the most a Decimal holds.
        let smallest = format!("0.{}1", "0".repeat(27));
        assert_eq!(parse_operand(&smallest), Some(Decimal::new(1, 28)));
        let too_small = format!("0.{}1", "0".repeat(29));
        assert_eq!(parse_operand(&too_small), None);
        assert_eq!(parse_operand(&format!("0.{}", "0".repeat(29))), None);

        assert_eq!(
            parse_operand("79228162514264337593543950335"),
            Some(Decimal::MAX)
        );
        assert_eq!(parse_operand("79228162514264337593543950336"), None);
        assert_eq!(parse_operand("123456789012345678901234567890"), None);
        assert_eq!(parse_operand("-123456789012345678901234567890"), None);
    }

    #[test]
    fn test_canonical_numeral() {
        assert_eq!(canonical_numeral(dec("5.000")), "5");
        assert_eq!(canonical_numeral(dec("2.50")), "2.5");
        assert_eq!(canonical_numeral(dec("-0")), "0");
        assert_eq!(canonical_numeral(dec("-12")), "-12");
    }

    #[test]
    fn test_apply_operation_is_exact() {
        let sum = apply_operation(Operation::Add, dec("0.1"), dec("0.2")).unwrap();
        assert_eq!(canonical_numeral(sum), "0.3");
        let product = apply_operation(Operation::Multiply, dec("1.5"), dec("4")).unwrap();
        assert_eq!(canonical_numeral(product), "6");
        let diff = apply_operation(Operation::Subtract, dec("3"), dec("10")).unwrap();
        assert_eq!(canonical_numeral(diff), "-7");
    }

    #[test]
    fn test_divide_by_zero() {
        assert_eq!(
            apply_operation(Operation::Divide, dec("5"), dec("0")),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            apply_operation(Operation::Divide, dec("5"), dec("0.000")),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_overflow() {
        assert_eq!(
            apply_operation(Operation::Multiply, Decimal::MAX, dec("2")),
            Err(CalcError::Overflow { op: Operation::Multiply })
        );
    }
}
