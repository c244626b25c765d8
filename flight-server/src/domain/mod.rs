//! Domain types for the flight route planner.
//!
//! This module contains the core domain model types that represent
//! validated route data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod city;
mod cost;

pub use city::{City, CityId};
pub use cost::{Cost, InvalidCost};
