//! Credentials and tenant selection.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Bearer access token issued by the auth service.
    #[serde(default)]
    pub access_token: String,

    /// Selected customer (tenant) id, sent as `X-Customer-ID`.
    #[serde(default)]
    pub customer_id: String,
}

impl SessionConfig {
    pub fn is_authenticated(&self) -> bool {
        !self.access_token.is_empty()
    }
}
