//! Flight status lookup and the list of scheduled flights.

pub mod api;
pub mod models;
pub mod page;
pub mod status;

pub use api::FlightApi;
pub use page::{FlightEvent, FlightStatusPage};
