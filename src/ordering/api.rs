use std::sync::Arc;
use tracing::{debug, warn};

use super::models::{OrderReply, OrderRequest, SeatTable, SnackCatalog};
use crate::error::ClientError;
use crate::http::{HttpClient, HttpResponse};

/// What the order endpoint said about a submitted order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    Accepted { message: Option<String> },
    Refused { status: u16, message: Option<String> },
}

/// Endpoints of the in-flight service API.
pub struct OrderingApi {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl OrderingApi {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL of a catalog image. Images are served from the server
    /// root, not from under `/api`.
    pub fn image_url(&self, path: &str) -> String {
        let root = self
            .base_url
            .strip_suffix("/api")
            .unwrap_or(&self.base_url);
        format!("{root}{path}")
    }

    pub async fn snacks(&self) -> Result<SnackCatalog, ClientError> {
        let response = self.http.get(&format!("{}/snacks", self.base_url)).await?;
        Ok(expect_success(response)?.json()?)
    }

    pub async fn seats(&self) -> Result<SeatTable, ClientError> {
        let response = self.http.get(&format!("{}/assentos", self.base_url)).await?;
        Ok(expect_success(response)?.json()?)
    }

    pub async fn place_order(&self, order: OrderRequest) -> Result<OrderOutcome, ClientError> {
        let body = serde_json::to_value(order)?;
        let response = self
            .http
            .post_json(&format!("{}/pedido", self.base_url), &body)
            .await?;

        if response.is_success() {
            let reply: OrderReply = response.json()?;
            debug!(status = ?reply.status, "Order accepted.");
            return Ok(OrderOutcome::Accepted {
                message: reply.message,
            });
        }

        let message = match response.json::<OrderReply>() {
            Ok(reply) => reply.message,
            Err(e) => {
                warn!(status = response.status, error = %e, "Order refusal body is not a reply object.");
                None
            }
        };
        Ok(OrderOutcome::Refused {
            status: response.status,
            message,
        })
    }
}

fn expect_success(response: HttpResponse) -> Result<HttpResponse, ClientError> {
    if response.is_success() {
        Ok(response)
    } else {
        Err(ClientError::Rejected {
            status: response.status,
            message: response.body,
        })
    }
}
