use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use shared::{
    domain::{AccessKey, FormPayload},
    protocol::{UpstreamReply, ACCESS_KEY_FIELD},
};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to build upstream client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned a non-JSON body with status {status}: {source}")]
    InvalidBody {
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

/// Where submissions go. The HTTP implementation talks to Web3Forms; tests
/// substitute their own.
#[async_trait]
pub trait FormUpstream: Send + Sync {
    async fn submit(&self, payload: &FormPayload) -> Result<UpstreamReply, RelayError>;
}

/// Sets `access_key`, replacing any value the client sent.
pub fn with_access_key(mut payload: FormPayload, key: &AccessKey) -> FormPayload {
    payload.insert(ACCESS_KEY_FIELD, key.expose());
    payload
}

#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    url: String,
}

impl HttpUpstream {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(RelayError::Client)?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

#[async_trait]
impl FormUpstream for HttpUpstream {
    async fn submit(&self, payload: &FormPayload) -> Result<UpstreamReply, RelayError> {
        let response = self
            .client
            .post(&self.url)
            .header(header::ACCEPT, "application/json")
            .form(&payload.to_pairs())
            .send()
            .await?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await?;
        debug!(status, bytes = bytes.len(), "upstream replied");
        UpstreamReply::from_slice(status, &bytes)
            .map_err(|source| RelayError::InvalidBody { status, source })
    }
}
