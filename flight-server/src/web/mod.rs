//! Web layer for the flight route planner.
//!
//! Provides HTTP endpoints for populating the network and answering
//! route and flight time queries.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
