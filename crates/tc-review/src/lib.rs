//! # tc-review
//!
//! The opportunity review workspace, independent of any UI toolkit.
//!
//! - [`query`]: the navigable query string and its typed [`ListQuery`] view
//! - [`queue`]: the loaded page, bulk selection, and reload tickets
//! - [`picker`]: per-item draft choice for bulk approval
//! - [`detail`]: draft selection, editing, and scheduling for one item
//! - [`dialogs`]: regenerate and reject dialog answers
//! - [`frontend`]: the [`ReviewFrontend`] mediator trait
//! - [`workspace`]: the async [`Workspace`] that drives all of the above

pub mod detail;
pub mod dialogs;
mod error;
pub mod frontend;
pub mod picker;
pub mod query;
pub mod queue;
pub mod workspace;

pub use detail::{DraftReview, ScheduleInput, today_in};
pub use dialogs::{RegenerateChoice, RejectionFeedback, RejectionPrompt};
pub use error::{ReviewError, ValidationError};
pub use frontend::{Notice, NoticeKind, ReviewFrontend};
pub use picker::BulkDraftPicker;
pub use query::{FilterKey, ListQuery, QueryParams};
pub use queue::{LoadTicket, ReviewQueue};
pub use workspace::{Outcome, Workspace};
