//! HTTP API module for stamp reporting.
//!
//! This module exposes the worked-time and respites reports as JSON
//! endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DayPath, RespitesQuery};
pub use response::{ApiError, RespiteBody, RespitesResponse, WorkedTimeResponse};
pub use state::AppState;
