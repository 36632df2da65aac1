//! Entity structs for ThreadCatch domain objects.
//!
//! Field names match the API's JSON exactly so every struct deserializes
//! straight from a response body.

mod draft;
mod opportunity;
mod stats;

pub use draft::{DraftId, GeneratedDraft, PostedResponse, ResponseDraft};
pub use opportunity::{OpportunityDetail, OpportunityId, OpportunityListItem};
pub use stats::{OpportunityStats, Page, RejectionReasonOption};
