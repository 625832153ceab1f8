//! In-flight snack ordering: seat card, snack catalog with single selection,
//! and order submission.

pub mod api;
pub mod models;
pub mod normalize;
pub mod page;

pub use api::{OrderOutcome, OrderingApi};
pub use page::{MessageKind, OrderingEvent, OrderingPage};
