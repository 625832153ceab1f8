use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snack {
    pub name: String,
    pub image_url: String,
}

/// `GET /snacks`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SnackCatalog {
    pub snacks: HashMap<String, Snack>,
}

impl SnackCatalog {
    /// Entries ordered by id, numerically when both ids are integers.
    pub fn sorted(self) -> Vec<(String, Snack)> {
        let mut entries: Vec<(String, Snack)> = self.snacks.into_iter().collect();
        entries.sort_by(|(a, _), (b, _)| compare_ids(a, b));
        entries
    }
}

fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeatStatus {
    #[serde(rename = "Status")]
    pub loyalty_status: String,
    #[serde(rename = "Pedidos")]
    pub snack_order_count: i64,
}

/// `GET /assentos`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeatTable {
    #[serde(rename = "assentos")]
    pub seats: HashMap<String, SeatStatus>,
}

/// `POST /pedido` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderRequest {
    #[serde(rename = "assento_id")]
    pub seat_id: i64,
    pub snack_id: i64,
}

/// `POST /pedido` reply. `status` is `sucesso`, `erro` or `recusado`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "mensagem")]
    pub message: Option<String>,
}
