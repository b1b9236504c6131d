//! 2048 rules engine (workspace facade crate).
//!
//! This package exposes a stable `game2048::{core,types}` public API while the
//! implementation lives in dedicated crates under `crates/`. It also hosts the
//! `game2048-replay` driver binary.

pub use game2048_core as core;
pub use game2048_types as types;

pub mod replay;
