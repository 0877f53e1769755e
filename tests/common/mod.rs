//! Shared test utilities for ketani integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Timing-sensitive harnesses run on a paused tokio clock
//! (`#[tokio::test(start_paused = true)]`) so debounce windows elapse
//! deterministically.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
