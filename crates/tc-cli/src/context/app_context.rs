use std::sync::Arc;

use anyhow::Context;
use tc_client::{ApiClient, SessionContext};
use tc_config::ThreadCatchConfig;
use tc_review::Workspace;

use crate::frontend::CliFrontend;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub api: Arc<ApiClient>,
    pub session: SessionContext,
    pub workspace: Workspace<ApiClient, CliFrontend>,
}

impl AppContext {
    pub fn init(config: &ThreadCatchConfig, frontend: CliFrontend) -> anyhow::Result<Self> {
        let api = Arc::new(ApiClient::new(&config.api).context("failed to build HTTP client")?);
        let session = SessionContext::from_config(&config.session);
        if session.access_token.is_none() {
            tracing::warn!(
                "no access token configured; set THREADCATCH_SESSION__ACCESS_TOKEN or [session] in .threadcatch/config.toml"
            );
        }
        tracing::debug!(base_url = api.base_url(), customer = ?session.customer_id, "client ready");

        let workspace = Workspace::new(Arc::clone(&api), frontend, session.clone(), &config.review);
        Ok(Self {
            api,
            session,
            workspace,
        })
    }
}
