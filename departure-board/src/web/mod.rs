//! Web layer for the departure board.
//!
//! Provides JSON endpoints for departures, the station directory and
//! health checks.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
