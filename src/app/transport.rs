// LogClassify - app/transport.rs
//
// HTTP exchange with the remote classification service.
//
// One POST per batch, JSON array body, whole response body parsed as JSON.
// No retry, no timeout and no cancellation: failures surface as
// `ClassifyError::Transport` or `ClassifyError::Decode` and the caller
// decides what to show. A non-2xx status is logged but the body is still
// parsed, since the service's error bodies are JSON too.

use crate::core::model::{ClassificationBatch, ClassificationResult};
use crate::util::constants::{CLASSIFY_ENDPOINT, HEALTH_PATH, USER_AGENT};
use crate::util::error::ClassifyError;
use reqwest::Url;

/// Client for the classification service.
///
/// Cheap to share behind an `Arc`; `reqwest::Client` pools connections
/// internally, so concurrent `classify` calls are fine.
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl ClassifierClient {
    /// Build a client for the service at its fixed address.
    pub fn local() -> Result<Self, ClassifyError> {
        Self::new(CLASSIFY_ENDPOINT)
    }

    /// Build a client that POSTs to `endpoint`.
    pub fn new(endpoint: &str) -> Result<Self, ClassifyError> {
        let endpoint = parse_endpoint(endpoint)?;
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ClassifyError::ClientBuild { source: e })?;

        tracing::debug!(endpoint = %endpoint, "Classifier client ready");
        Ok(Self { http, endpoint })
    }

    /// The endpoint batches are sent to.
    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    /// Submit `batch` and return the parsed response body.
    ///
    /// An empty batch is sent as `[]`, not skipped.
    pub async fn classify(
        &self,
        batch: &ClassificationBatch,
    ) -> Result<ClassificationResult, ClassifyError> {
        tracing::debug!(endpoint = %self.endpoint, items = batch.len(), "POST classify");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(batch)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_json(response).await
    }

    /// Query the service's health endpoint on the same host.
    pub async fn check_health(&self) -> Result<serde_json::Value, ClassifyError> {
        let url = health_url(&self.endpoint);
        tracing::debug!(url = %url, "GET health");

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        self.read_json(response).await
    }

    async fn read_json(
        &self,
        response: reqwest::Response,
    ) -> Result<serde_json::Value, ClassifyError> {
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "Classification service returned a non-success status"
            );
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        serde_json::from_slice(&body).map_err(|e| ClassifyError::Decode {
            endpoint: self.endpoint.to_string(),
            status: status.as_u16(),
            source: e,
        })
    }

    fn transport_error(&self, source: reqwest::Error) -> ClassifyError {
        ClassifyError::Transport {
            endpoint: self.endpoint.to_string(),
            source,
        }
    }
}

/// Validate an endpoint string: absolute, http or https, with a host.
pub fn parse_endpoint(endpoint: &str) -> Result<Url, ClassifyError> {
    let invalid = |reason: String| ClassifyError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        reason,
    };

    let url = Url::parse(endpoint).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host".to_string()));
    }
    Ok(url)
}

/// Health check URL: same scheme, host and port, path replaced.
pub fn health_url(endpoint: &Url) -> Url {
    let mut url = endpoint.clone();
    url.set_path(HEALTH_PATH);
    url.set_query(None);
    url.set_fragment(None);
    url
}
