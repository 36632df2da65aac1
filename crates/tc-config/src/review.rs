//! Review workspace defaults.

use serde::{Deserialize, Serialize};

const fn default_page_size() -> u32 {
    20
}

const fn default_notice_secs() -> u64 {
    3
}

/// Largest page the list endpoint serves.
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReviewConfig {
    /// Items per queue page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// How long transient notices stay visible.
    #[serde(default = "default_notice_secs")]
    pub notice_secs: u64,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            notice_secs: default_notice_secs(),
        }
    }
}
