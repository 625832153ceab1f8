use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Endpoint unavailable: {0}")]
    Unavailable(String),
}

/// Status and raw body of a completed exchange. Any status counts as
/// completed; only failures to talk to the server are `TransportError`s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// The HTTP capability both pages are written against.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    /// Sends `body` as `application/json`.
    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError>;
}

/// `HttpClient` backed by a shared `reqwest::Client`.
pub struct ReqwestClient {
    client: Client,
}

impl Default for ReqwestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// A URL that cannot be parsed names no reachable endpoint.
    fn endpoint(url: &str) -> Result<Url, TransportError> {
        Url::parse(url).map_err(|e| TransportError::Unavailable(format!("{url}: {e}")))
    }

    async fn finish(response: reqwest::Response) -> Result<HttpResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok(HttpResponse { status, body })
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        debug!(%url, "GET");
        let response = self.client.get(Self::endpoint(url)?).send().await?;
        Self::finish(response).await
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        debug!(%url, "POST");
        let response = self
            .client
            .post(Self::endpoint(url)?)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body.to_string())
            .send()
            .await?;
        Self::finish(response).await
    }
}
