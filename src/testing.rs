use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::http::{HttpClient, HttpResponse, TransportError};

#[derive(Debug, Clone, PartialEq)]
pub enum Recorded {
    Get(String),
    Post(String, serde_json::Value),
}

/// Canned-response HTTP client that records every request it receives.
/// Unrouted URLs fail with `TransportError::Unavailable`.
#[derive(Default)]
pub struct FakeHttp {
    routes: Mutex<HashMap<String, HttpResponse>>,
    requests: Mutex<Vec<Recorded>>,
}

impl FakeHttp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(&self, url: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(url.to_string(), HttpResponse::new(status, body));
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<(String, serde_json::Value)> {
        self.requests()
            .into_iter()
            .filter_map(|r| match r {
                Recorded::Post(url, body) => Some((url, body)),
                Recorded::Get(_) => None,
            })
            .collect()
    }

    fn answer(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.routes
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| TransportError::Unavailable(url.to_string()))
    }
}

#[async_trait]
impl HttpClient for FakeHttp {
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push(Recorded::Get(url.to_string()));
        self.answer(url)
    }

    async fn post_json(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<HttpResponse, TransportError> {
        self.requests
            .lock()
            .unwrap()
            .push(Recorded::Post(url.to_string(), body.clone()));
        self.answer(url)
    }
}
