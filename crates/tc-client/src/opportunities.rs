//! [`OpportunityApi`] endpoints over HTTP.

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tc_core::entities::{
    OpportunityDetail, OpportunityId, OpportunityListItem, OpportunityStats, Page,
    RejectionReasonOption,
};
use tc_core::enums::OpportunityStatus;

use crate::http::check_response;
use crate::payloads::{
    ApproveRequest, BulkApproval, BulkApproveRequest, BulkApproveResult, BulkGenerateResult,
    BulkIdsRequest, BulkReadResponse, BulkStatusRequest, BulkStatusResponse, ListFilters,
    MarkReadResponse, RegenerateRequest, RegenerateResponse, RejectRequest, RejectResponse,
    RejectionReasonsResponse, StatusResponse,
};
use crate::{ApiClient, ApiError, OpportunityApi, SessionContext};

impl ApiClient {
    async fn get_json<T: DeserializeOwned>(
        &self,
        session: &SessionContext,
        url: &str,
    ) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let request = session.apply(self.http.get(url));
        let resp = check_response(request.send().await?).await?;
        Ok(resp.json().await?)
    }

    async fn post_json<B, T>(
        &self,
        session: &SessionContext,
        url: &str,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        tracing::debug!(%url, "POST");
        let request = session.apply(self.http.post(url)).json(body);
        let resp = check_response(request.send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[async_trait]
impl OpportunityApi for ApiClient {
    async fn list(
        &self,
        session: &SessionContext,
        filters: &ListFilters,
    ) -> Result<Page<OpportunityListItem>, ApiError> {
        let query = filters.query_string();
        let url = if query.is_empty() {
            self.url("opportunities/")
        } else {
            format!("{}?{query}", self.url("opportunities/"))
        };
        self.get_json(session, &url).await
    }

    async fn stats(&self, session: &SessionContext) -> Result<OpportunityStats, ApiError> {
        self.get_json(session, &self.url("opportunities/stats/"))
            .await
    }

    async fn get(
        &self,
        session: &SessionContext,
        id: &str,
    ) -> Result<OpportunityDetail, ApiError> {
        self.get_json(session, &self.opportunity_url(id, None))
            .await
    }

    async fn mark_read(
        &self,
        session: &SessionContext,
        id: &str,
    ) -> Result<MarkReadResponse, ApiError> {
        let body = serde_json::json!({});
        self.post_json(session, &self.opportunity_url(id, Some("read")), &body)
            .await
    }

    async fn approve(
        &self,
        session: &SessionContext,
        id: &str,
        request: &ApproveRequest,
    ) -> Result<StatusResponse, ApiError> {
        self.post_json(session, &self.opportunity_url(id, Some("approve")), request)
            .await
    }

    async fn reject(
        &self,
        session: &SessionContext,
        id: &str,
        request: &RejectRequest,
    ) -> Result<RejectResponse, ApiError> {
        self.post_json(session, &self.opportunity_url(id, Some("reject")), request)
            .await
    }

    async fn regenerate(
        &self,
        session: &SessionContext,
        id: &str,
        request: &RegenerateRequest,
    ) -> Result<RegenerateResponse, ApiError> {
        self.post_json(session, &self.opportunity_url(id, Some("regenerate")), request)
            .await
    }

    async fn rejection_reasons(
        &self,
        session: &SessionContext,
    ) -> Result<Vec<RejectionReasonOption>, ApiError> {
        let response: RejectionReasonsResponse = self
            .get_json(session, &self.url("opportunities/rejection-reasons/"))
            .await?;
        Ok(response.reasons)
    }

    async fn bulk_status(
        &self,
        session: &SessionContext,
        ids: &[OpportunityId],
        status: OpportunityStatus,
    ) -> Result<BulkStatusResponse, ApiError> {
        let body = BulkStatusRequest {
            opportunity_ids: ids,
            status,
        };
        self.post_json(session, &self.url("opportunities/bulk-status/"), &body)
            .await
    }

    async fn bulk_read(
        &self,
        session: &SessionContext,
        ids: &[OpportunityId],
    ) -> Result<BulkReadResponse, ApiError> {
        let body = BulkIdsRequest {
            opportunity_ids: ids,
        };
        self.post_json(session, &self.url("opportunities/bulk-read/"), &body)
            .await
    }

    async fn bulk_generate(
        &self,
        session: &SessionContext,
        ids: &[OpportunityId],
    ) -> Result<BulkGenerateResult, ApiError> {
        let body = BulkIdsRequest {
            opportunity_ids: ids,
        };
        self.post_json(session, &self.url("opportunities/bulk-generate/"), &body)
            .await
    }

    async fn bulk_approve(
        &self,
        session: &SessionContext,
        approvals: &[BulkApproval],
    ) -> Result<BulkApproveResult, ApiError> {
        let body = BulkApproveRequest { approvals };
        self.post_json(session, &self.url("opportunities/bulk-approve/"), &body)
            .await
    }
}
