/// Calculator Engine: Canonical Hashing
///
/// Deterministic canonical serialization + SHA-256 hashing.
///
/// Rules:
///   - Fixed field order, engine_version first
///   - Operation as its display symbol, or null
///   - UTF-8 JSON, no whitespace

use serde_json::{Map, Value};
use sha2::{Digest, Sha256};

use crate::domain::CalculatorState;
use crate::ENGINE_VERSION;

/// Canonical serialization of a state to UTF-8 JSON bytes.
pub fn canonical_serialize(state: &CalculatorState) -> Vec<u8> {
    // Serializing a Value built from strings, bools and integers cannot fail.
    build_canonical_value(state).to_string().into_bytes()
}

/// SHA-256 of canonical serialization. Lowercase hex string.
pub fn canonical_hash(state: &CalculatorState) -> String {
    let digest = Sha256::digest(canonical_serialize(state));
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Field order: engine_version, previous_operand, operation,
///              current_operand, should_reset_screen
fn build_canonical_value(state: &CalculatorState) -> Value {
    let mut root = Map::new();
    root.insert(
        "engine_version".to_string(),
        Value::Number(ENGINE_VERSION.into()),
    );
    root.insert(
        "previous_operand".to_string(),
        Value::String(state.previous_operand.clone()),
    );
    root.insert(
        "operation".to_string(),
        state
            .operation
            .map(|op| Value::String(op.symbol().to_string()))
            .unwrap_or(Value::Null),
    );
    root.insert(
        "current_operand".to_string(),
        Value::String(state.current_operand.clone()),
    );
    root.insert(
        "should_reset_screen".to_string(),
        Value::Bool(state.should_reset_screen),
    );
    Value::Object(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operation;

    #[test]
    fn test_canonical_field_order() {
        let s = CalculatorState {
            previous_operand: "5".to_string(),
            current_operand: "2".to_string(),
            operation: Some(Operation::Multiply),
            should_reset_screen: false,
        };
        let json = String::from_utf8(canonical_serialize(&s)).unwrap();
        assert_eq!(
            json,
            r#"{"engine_version":1,"previous_operand":"5","operation":"×","current_operand":"2","should_reset_screen":false}"#
        );
    }

    #[test]
    fn test_hash_shape_and_sensitivity() {
        let a = CalculatorState::default();
        let mut b = a.clone();
        b.current_operand = "1".to_string();
        let ha = canonical_hash(&a);
        assert_eq!(ha.len(), 64);
        assert!(ha.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(ha, canonical_hash(&a.clone()));
        assert_ne!(ha, canonical_hash(&b));
    }
}
