pub mod approve;
pub mod bulk;
pub mod dispatch;
pub mod queue;
pub mod reasons;
pub mod regenerate;
pub mod reject;
pub mod shared;
pub mod show;
pub mod stats;
