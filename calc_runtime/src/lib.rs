#![forbid(unsafe_code)]

//! Calculator runtime.
//!
//! Wraps `calc_engine` with key mapping, a command tape, replay,
//! sessions, configuration and the `calc` binary.
//!
//! No arithmetic or entry rules live here; every command is delegated to
//! the engine.

pub mod config;
pub mod error;
pub mod keymap;
pub mod replay;
pub mod session;
pub mod tape;
