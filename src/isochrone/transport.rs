use crate::core::config::IsochroneConfig;
use crate::{MapError, Result};
use async_trait::async_trait;

/// HTTP seam used by the pipeline.
///
/// Sending and body decoding are separate stages so a run can wait for every
/// response before decoding any body.
#[async_trait]
pub trait IsochroneTransport: Send + Sync {
    type Response: Send;

    /// Issues a GET for `url`; non-success statuses are errors
    async fn send(&self, url: &str) -> Result<Self::Response>;

    /// Decodes a response body as JSON
    async fn json(&self, response: Self::Response) -> Result<serde_json::Value>;
}

/// `reqwest`-backed transport sharing one connection pool across requests
#[derive(Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &IsochroneConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
        })
    }
}

// URLs carry the access token, so it is stripped from errors before they travel further.
fn redact(err: reqwest::Error) -> MapError {
    MapError::Network(err.without_url())
}

#[async_trait]
impl IsochroneTransport for HttpTransport {
    type Response = reqwest::Response;

    async fn send(&self, url: &str) -> Result<Self::Response> {
        let response = self.client.get(url).send().await.map_err(redact)?;
        response.error_for_status().map_err(redact)
    }

    async fn json(&self, response: Self::Response) -> Result<serde_json::Value> {
        response.json().await.map_err(redact)
    }
}
