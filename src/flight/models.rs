use serde::{Deserialize, Serialize};

use super::status::is_delayed_marker;

/// Schedule entry as stored by the status server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightInfo {
    #[serde(rename = "codigo_voo")]
    pub code: String,
    #[serde(rename = "origem")]
    pub origin: String,
    #[serde(rename = "destino")]
    pub destination: String,
    #[serde(rename = "partida_programada")]
    pub scheduled_departure: String,
    #[serde(rename = "chegada_programada")]
    pub scheduled_arrival: String,
    #[serde(rename = "dia_partida")]
    pub day: String,
    /// Domestic or international.
    #[serde(rename = "voo")]
    pub flight_type: String,
    #[serde(rename = "status", default)]
    pub raw_status: Option<String>,
    #[serde(rename = "nova_partida", default)]
    pub new_departure: Option<String>,
    #[serde(rename = "nova_chegada", default)]
    pub new_arrival: Option<String>,
}

impl FlightInfo {
    pub fn is_delayed(&self) -> bool {
        self.raw_status.as_deref().is_some_and(is_delayed_marker)
    }
}

/// One element of `GET /status/{code}` or `GET /status/all`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightStatusReport {
    #[serde(rename = "info_voo")]
    pub flight_info: FlightInfo,
    #[serde(rename = "status_calculado")]
    pub computed_status: String,
}
