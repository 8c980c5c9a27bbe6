//! Integration test utilities for the chat client
//!
//! Payload fixtures shaped like real REST responses and gateway frames, and
//! assertion helpers for mapping results.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
