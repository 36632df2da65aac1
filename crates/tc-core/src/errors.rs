//! Cross-cutting error types for ThreadCatch.
//!
//! Transport errors live in `tc-client` and workflow errors in `tc-review`.
//! This module only covers failures that can be raised while handling core
//! values on their own.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not match any known value of an enum.
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}
