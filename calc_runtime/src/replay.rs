//! Replay orchestrator: rebuild state from a command tape.
//!
//! Delegates every command to the engine. No shortcuts, no cached state.

use calc_engine::commands::{CommandEnvelope, SCHEMA_VERSION};
use calc_engine::domain::CalculatorState;
use calc_engine::engine::CalcEngine;
use calc_engine::hashing::canonical_hash;

use crate::error::{RuntimeError, RuntimeResult};

/// Rebuild the calculator state from envelopes.
///
/// 1. Reject envelopes with an unsupported schema version
/// 2. Feed each command to a fresh engine
/// 3. Return (final_state, canonical_hash)
///
/// User-facing errors recorded on the tape are replayed as the same
/// no-change rejections, so they do not stop the rebuild.
pub fn rebuild_state(envelopes: &[CommandEnvelope]) -> RuntimeResult<(CalculatorState, String)> {
    check_schema_versions(envelopes)?;

    let mut engine = CalcEngine::new();
    for e in envelopes {
        engine.dispatch(e.command);
    }

    let state = engine.state().clone();
    let hash = canonical_hash(&state);
    Ok((state, hash))
}

/// Fail on the first envelope whose schema version this build cannot read.
pub fn check_schema_versions(envelopes: &[CommandEnvelope]) -> RuntimeResult<()> {
    match envelopes.iter().find(|e| e.schema_version != SCHEMA_VERSION) {
        Some(e) => Err(RuntimeError::SchemaVersion {
            sequence: e.sequence,
            expected: SCHEMA_VERSION,
            got: e.schema_version,
        }),
        None => Ok(()),
    }
}

/// Rebuild state and return only the canonical hash.
pub fn rebuild_hash(envelopes: &[CommandEnvelope]) -> RuntimeResult<String> {
    rebuild_state(envelopes).map(|(_, hash)| hash)
}

/// Replay the same envelopes twice and require identical hashes.
pub fn verify_determinism(envelopes: &[CommandEnvelope]) -> RuntimeResult<String> {
    let first = rebuild_hash(envelopes)?;
    let second = rebuild_hash(envelopes)?;
    if first != second {
        return Err(RuntimeError::Determinism { first, second });
    }
    Ok(first)
}
