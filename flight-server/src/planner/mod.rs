//! Route planning over the city network.
//!
//! This module answers the two user-facing questions: "what is the
//! cheapest route between two cities?" (shortest-path search over the
//! directed cost graph) and "which scheduled flight is closest to the
//! time I want?" (per-route time index lookup).

mod facade;
mod search;

pub use facade::FlightPlanner;
pub use search::{RouteSummary, SearchError, shortest_path};
