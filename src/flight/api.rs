use std::sync::Arc;

use super::models::FlightStatusReport;
use crate::error::ClientError;
use crate::http::HttpClient;

/// Endpoints of the flight-status API.
pub struct FlightApi {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl FlightApi {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// Status of one flight. Any non-2xx answer is `NotFound`.
    pub async fn flight(&self, code: &str) -> Result<FlightStatusReport, ClientError> {
        let url = format!("{}/status/{}", self.base_url, urlencoding::encode(code));
        let response = self.http.get(&url).await?;
        if !response.is_success() {
            return Err(ClientError::NotFound(code.to_string()));
        }
        Ok(response.json()?)
    }

    pub async fn all_flights(&self) -> Result<Vec<FlightStatusReport>, ClientError> {
        let response = self
            .http
            .get(&format!("{}/status/all", self.base_url))
            .await?;
        if !response.is_success() {
            return Err(ClientError::Rejected {
                status: response.status,
                message: response.body,
            });
        }
        Ok(response.json()?)
    }
}
