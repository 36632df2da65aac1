//! # tc-client
//!
//! HTTP client for the ThreadCatch opportunity API.
//!
//! [`OpportunityApi`] is the seam the review workspace talks to;
//! [`ApiClient`] implements it over reqwest. Every call takes a
//! [`SessionContext`] explicitly, so credentials and tenant selection never
//! come from ambient state.

mod error;
mod http;
mod opportunities;
pub mod payloads;
mod session;

pub use error::ApiError;
pub use http::{extract_error_message, status_fallback};
pub use session::{CUSTOMER_HEADER, SessionContext};

use async_trait::async_trait;
use tc_config::ApiConfig;
use tc_core::entities::{
    OpportunityDetail, OpportunityId, OpportunityListItem, OpportunityStats, Page,
    RejectionReasonOption,
};
use tc_core::enums::OpportunityStatus;

use crate::payloads::{
    ApproveRequest, BulkApproval, BulkApproveResult, BulkGenerateResult, BulkReadResponse,
    BulkStatusResponse, ListFilters, MarkReadResponse, RegenerateRequest, RegenerateResponse,
    RejectRequest, RejectResponse, StatusResponse,
};

// ── Seam ───────────────────────────────────────────────────────────

/// Remote operations consumed by the opportunity review workflow.
#[async_trait]
pub trait OpportunityApi: Send + Sync {
    /// `GET /opportunities/`
    async fn list(
        &self,
        session: &SessionContext,
        filters: &ListFilters,
    ) -> Result<Page<OpportunityListItem>, ApiError>;

    /// `GET /opportunities/stats/`
    async fn stats(&self, session: &SessionContext) -> Result<OpportunityStats, ApiError>;

    /// `GET /opportunities/{id}/`
    async fn get(
        &self,
        session: &SessionContext,
        id: &str,
    ) -> Result<OpportunityDetail, ApiError>;

    /// `POST /opportunities/{id}/read/`
    async fn mark_read(
        &self,
        session: &SessionContext,
        id: &str,
    ) -> Result<MarkReadResponse, ApiError>;

    /// `POST /opportunities/{id}/approve/`
    async fn approve(
        &self,
        session: &SessionContext,
        id: &str,
        request: &ApproveRequest,
    ) -> Result<StatusResponse, ApiError>;

    /// `POST /opportunities/{id}/reject/`
    async fn reject(
        &self,
        session: &SessionContext,
        id: &str,
        request: &RejectRequest,
    ) -> Result<RejectResponse, ApiError>;

    /// `POST /opportunities/{id}/regenerate/`
    async fn regenerate(
        &self,
        session: &SessionContext,
        id: &str,
        request: &RegenerateRequest,
    ) -> Result<RegenerateResponse, ApiError>;

    /// `GET /opportunities/rejection-reasons/`
    async fn rejection_reasons(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<RejectionReasonOption>, ApiError>;

    /// `POST /opportunities/bulk-status/`
    async fn bulk_status(
        &self,
        session: &SessionContext,
        ids: &[OpportunityId],
        status: OpportunityStatus,
    ) -> Result<BulkStatusResponse, ApiError>;

    /// `POST /opportunities/bulk-read/`
    async fn bulk_read(
        &self,
        session: &SessionContext,
        ids: &[OpportunityId],
    ) -> Result<BulkReadResponse, ApiError>;

    /// `POST /opportunities/bulk-generate/`
    async fn bulk_generate(
        &self,
        session: &SessionContext,
        ids: &[OpportunityId],
    ) -> Result<BulkGenerateResult, ApiError>;

    /// `POST /opportunities/bulk-approve/`
    async fn bulk_approve(
        &self,
        session: &SessionContext,
        approvals: &[BulkApproval],
    ) -> Result<BulkApproveResult, ApiError>;
}

// ── Client ─────────────────────────────────────────────────────────

/// reqwest-backed [`OpportunityApi`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for the configured API.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Http`] if the underlying `reqwest::Client` fails
    /// to build (e.g. the TLS backend cannot initialize).
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            http,
            base_url: config.normalized_base_url().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `opportunities/stats/`.
    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// URL for a per-opportunity action, e.g. `opportunities/{id}/approve/`.
    fn opportunity_url(&self, id: &str, action: Option<&str>) -> String {
        let id = urlencoding::encode(id);
        match action {
            Some(action) => self.url(&format!("opportunities/{id}/{action}/")),
            None => self.url(&format!("opportunities/{id}/")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.into(),
            ..Default::default()
        })
        .expect("client should build")
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client = client("http://localhost:8000/api/");
        assert_eq!(client.base_url(), "http://localhost:8000/api");
        assert_eq!(
            client.url("/opportunities/stats/"),
            "http://localhost:8000/api/opportunities/stats/"
        );
    }

    #[test]
    fn opportunity_urls_encode_ids() {
        let client = client("http://localhost:8000/api");
        assert_eq!(
            client.opportunity_url("a b", Some("approve")),
            "http://localhost:8000/api/opportunities/a%20b/approve/"
        );
        assert_eq!(
            client.opportunity_url("abc", None),
            "http://localhost:8000/api/opportunities/abc/"
        );
    }
}
