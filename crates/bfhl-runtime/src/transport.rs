use async_trait::async_trait;
use bfhl_types::{RequestFailure, RequestPayload, ResponsePayload};
use serde::Deserialize;
use std::fmt;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::{Error, Result};

/// Network boundary of the client. One call per submission; no retries.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST the payload and decode the response body.
    async fn send(&self, request: &RequestPayload) -> std::result::Result<ResponsePayload, RequestFailure>;

    /// GET the endpoint and return the service's operation code.
    async fn probe(&self) -> std::result::Result<i64, RequestFailure>;
}

#[derive(Debug, Deserialize)]
struct ProbeBody {
    operation_code: i64,
}

#[derive(Clone)]
pub struct ReqwestTransport {
    endpoint: Url,
    client: reqwest::Client,
}

impl fmt::Debug for ReqwestTransport {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ReqwestTransport")
            .field("endpoint", &self.endpoint.as_str())
            .finish()
    }
}

impl ReqwestTransport {
    pub fn new(endpoint: Url) -> Result<Self> {
        Self::build(endpoint, None)
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::build(config.endpoint_url()?, config.timeout())
    }

    fn build(endpoint: Url, timeout: Option<std::time::Duration>) -> Result<Self> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("bfhl/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| Error::Http(format!("failed to initialize HTTP client: {err}")))?;

        Ok(Self { endpoint, client })
    }

    async fn read_body(
        response: reqwest::Response,
    ) -> std::result::Result<Vec<u8>, RequestFailure> {
        let status = response.status();
        debug!(status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(RequestFailure::Status(status.as_u16()));
        }

        response
            .bytes()
            .await
            .map(|bytes| bytes.to_vec())
            .map_err(|err| RequestFailure::Network(err.to_string()))
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: &RequestPayload) -> std::result::Result<ResponsePayload, RequestFailure> {
        debug!(endpoint = %self.endpoint, items = request.data.len(), "POST");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
            .map_err(|err| RequestFailure::Network(err.to_string()))?;

        let body = Self::read_body(response).await?;
        ResponsePayload::from_slice(&body)
    }

    async fn probe(&self) -> std::result::Result<i64, RequestFailure> {
        debug!(endpoint = %self.endpoint, "GET");

        let response = self
            .client
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|err| RequestFailure::Network(err.to_string()))?;

        let body = Self::read_body(response).await?;
        let probe: ProbeBody =
            serde_json::from_slice(&body).map_err(|err| RequestFailure::Decode(err.to_string()))?;
        Ok(probe.operation_code)
    }
}
