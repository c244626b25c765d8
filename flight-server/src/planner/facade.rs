//! Query facade over the route network.

use crate::domain::CityId;
use crate::network::RouteNetwork;

use super::search::{RouteSummary, SearchError, shortest_path};

/// Read-only planner over a borrowed network.
///
/// Bundles the two query operations behind one handle so callers hold a
/// single borrow of the network for the duration of a query.
pub struct FlightPlanner<'a> {
    network: &'a RouteNetwork,
}

impl<'a> FlightPlanner<'a> {
    /// Create a planner over the given network.
    pub fn new(network: &'a RouteNetwork) -> Self {
        Self { network }
    }

    /// Find the cheapest route from `from` to `to`.
    pub fn find_route(&self, from: CityId, to: CityId) -> Result<RouteSummary, SearchError> {
        shortest_path(self.network, from, to)
    }

    /// Find the recorded flight time on `from` → `to` closest to
    /// `desired`.
    ///
    /// Fails with [`SearchError::NoFlightTimes`] when the route has no
    /// recorded times at all.
    pub fn closest_departure(
        &self,
        from: CityId,
        to: CityId,
        desired: u32,
    ) -> Result<u32, SearchError> {
        if !self.network.contains(from) {
            return Err(SearchError::UnknownCity(from));
        }
        if !self.network.contains(to) {
            return Err(SearchError::UnknownCity(to));
        }

        self.network
            .flight_times(from, to)
            .and_then(|times| times.closest(desired))
            .ok_or(SearchError::NoFlightTimes { from, to })
    }
}
