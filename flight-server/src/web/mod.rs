//! Web layer for the flight results service.
//!
//! Provides HTTP endpoints for registering a search and deriving filtered,
//! ranked results from it.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
