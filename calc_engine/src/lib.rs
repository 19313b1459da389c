#![forbid(unsafe_code)]

/// Engine v1. Changes to transition behaviour bump this value.
pub const ENGINE_VERSION: u32 = 1;

pub mod arithmetic;
pub mod commands;
pub mod display;
pub mod domain;
pub mod engine;
pub mod error;
pub mod hashing;
pub mod invariants;
pub mod state;
pub mod transitions;
