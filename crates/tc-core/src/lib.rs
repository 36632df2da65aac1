//! # tc-core
//!
//! Core types shared by every ThreadCatch crate.
//!
//! - Entity structs for opportunities, response drafts, posted responses,
//!   aggregate stats, and the paginated list envelope
//! - Status and filter enums with their wire representations
//! - Centralized label/class lookup tables (one mapping per enum)
//! - Display formatting helpers (relative times, truncation)
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod format;
pub mod labels;

pub use errors::CoreError;
