use thiserror::Error;

use crate::http::TransportError;

/// Everything that can end a page action.
///
/// Page operations render the failure into the page before returning it, so
/// callers only need the value to decide what to log. `Template` is the one
/// variant that never reaches the page.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Seat not identified")]
    SeatNotIdentified,
    #[error("No snack selected")]
    NoSnackSelected,
    #[error("Invalid snack id: {0}")]
    InvalidSnackId(String),
    #[error("Flight code is empty")]
    MissingFlightCode,
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Request rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Templating error: {0}")]
    Template(#[from] tera::Error),
}

impl ClientError {
    /// True for failures caught before any request was issued.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ClientError::SeatNotIdentified
                | ClientError::NoSnackSelected
                | ClientError::InvalidSnackId(_)
                | ClientError::MissingFlightCode
        )
    }
}
