use crate::api::ApiError;
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// Fetches a URL and hands back its JSON body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Value, ApiError>;
}

/// `reqwest`-backed transport. Non-2xx statuses are failures.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Value, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.json::<Value>().await?;
        Ok(body)
    }
}
