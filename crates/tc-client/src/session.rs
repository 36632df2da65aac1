//! Per-call credentials and tenant selection.

use tc_config::SessionConfig;

/// Header carrying the selected customer (tenant) id.
pub const CUSTOMER_HEADER: &str = "X-Customer-ID";

/// Credentials handed to every API call.
///
/// Nothing is read from ambient storage; callers build a context once (from
/// config or a login flow) and pass it by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionContext {
    pub access_token: Option<String>,
    pub customer_id: Option<String>,
}

impl SessionContext {
    #[must_use]
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: Some(access_token.into()),
            customer_id: None,
        }
    }

    #[must_use]
    pub fn with_customer(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    /// Build from config; empty strings mean "not set".
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            access_token: non_empty(&config.access_token),
            customer_id: non_empty(&config.customer_id),
        }
    }

    /// Attach the bearer token and tenant header when present.
    pub fn apply(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let Some(token) = self.access_token.as_deref() else {
            return request;
        };
        let request = request.bearer_auth(token);
        match self.customer_id.as_deref() {
            Some(customer) => request.header(CUSTOMER_HEADER, customer),
            None => request,
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn built_headers(session: &SessionContext) -> reqwest::header::HeaderMap {
        let client = reqwest::Client::new();
        session
            .apply(client.get("http://localhost/api/opportunities/"))
            .build()
            .unwrap()
            .headers()
            .clone()
    }

    #[test]
    fn from_config_treats_empty_as_unset() {
        let session = SessionContext::from_config(&SessionConfig::default());
        assert_eq!(session, SessionContext::default());
    }

    #[test]
    fn applies_bearer_and_customer_headers() {
        let session = SessionContext::new("tok-1").with_customer("cust-9");
        let headers = built_headers(&session);
        assert_eq!(headers["authorization"], "Bearer tok-1");
        assert_eq!(headers[CUSTOMER_HEADER], "cust-9");
    }

    #[test]
    fn anonymous_session_adds_nothing() {
        let session = SessionContext {
            access_token: None,
            customer_id: Some("cust-9".into()),
        };
        let headers = built_headers(&session);
        assert!(headers.get("authorization").is_none());
        assert!(headers.get(CUSTOMER_HEADER).is_none());
    }
}
