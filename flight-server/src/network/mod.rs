//! Directed route network between cities.
//!
//! The network is the single source of truth for everything the planner
//! queries: the city table, the directed route costs, and the flight
//! times recorded per route. Routes are stored as a map from ordered
//! city pairs to their cost, so A→B and B→A are independent edges and
//! the absence of an entry means no direct route exists. Nothing here is
//! cached or derived; every query reads the current state.

mod config;

pub use config::NetworkConfig;

use std::collections::HashMap;

use crate::domain::{City, CityId, Cost};
use crate::schedule::TimeIndex;

/// Errors from mutating the network.
///
/// All variants are recoverable: a failed operation leaves the network
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A city with this id was already added.
    #[error("city with id {0} already exists")]
    DuplicateCity(CityId),

    /// The configured city capacity is exhausted.
    #[error("city table is full ({max} cities)")]
    CapacityExceeded { max: usize },

    /// The id does not name a known city.
    #[error("unknown city: {0}")]
    UnknownCity(CityId),
}

/// The directed, weighted route network.
#[derive(Debug, Clone)]
pub struct RouteNetwork {
    config: NetworkConfig,

    /// Cities in insertion order.
    cities: Vec<City>,

    /// Directed route costs, keyed by (from, to).
    routes: HashMap<(CityId, CityId), Cost>,

    /// Flight times per directed route, created lazily on first insert.
    schedules: HashMap<(CityId, CityId), TimeIndex>,
}

impl RouteNetwork {
    /// Create an empty network with the given configuration.
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            config,
            cities: Vec::new(),
            routes: HashMap::new(),
            schedules: HashMap::new(),
        }
    }

    /// Add a city.
    ///
    /// Fails with [`NetworkError::DuplicateCity`] if the id is taken and
    /// [`NetworkError::CapacityExceeded`] once the configured bound is
    /// reached.
    pub fn add_city(&mut self, id: CityId, name: impl Into<String>) -> Result<(), NetworkError> {
        if self.contains(id) {
            return Err(NetworkError::DuplicateCity(id));
        }
        if self.cities.len() >= self.config.max_cities {
            return Err(NetworkError::CapacityExceeded {
                max: self.config.max_cities,
            });
        }

        self.cities.push(City::new(id, name));
        Ok(())
    }

    /// Set the cost of the directed route from `from` to `to`.
    ///
    /// Upserts: setting an existing route overwrites its cost. Both
    /// cities must already exist. Self-loops are stored like any other
    /// route.
    pub fn set_route(&mut self, from: CityId, to: CityId, cost: Cost) -> Result<(), NetworkError> {
        self.require(from)?;
        self.require(to)?;

        self.routes.insert((from, to), cost);
        Ok(())
    }

    /// Record a flight time on the directed route from `from` to `to`.
    ///
    /// The route's time index is created on first use; a time that is
    /// already recorded is silently discarded. A flight time may be
    /// recorded even if no route cost has been set for the pair.
    pub fn add_flight_time(
        &mut self,
        from: CityId,
        to: CityId,
        time: u32,
    ) -> Result<(), NetworkError> {
        self.require(from)?;
        self.require(to)?;

        self.schedules.entry((from, to)).or_default().insert(time);
        Ok(())
    }

    /// Look up a city by id.
    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    /// Whether a city with this id exists.
    pub fn contains(&self, id: CityId) -> bool {
        self.city(id).is_some()
    }

    /// All cities, in insertion order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities added so far.
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// The configured maximum number of cities.
    pub fn capacity(&self) -> usize {
        self.config.max_cities
    }

    /// Cost of the direct route from `from` to `to`, if one is set.
    pub fn route_cost(&self, from: CityId, to: CityId) -> Option<Cost> {
        self.routes.get(&(from, to)).copied()
    }

    /// All directed routes as `(from, to, cost)`, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = (CityId, CityId, Cost)> + '_ {
        self.routes
            .iter()
            .map(|(&(from, to), &cost)| (from, to, cost))
    }

    /// Outgoing routes from a city as `(destination, cost)`.
    pub fn departures_from(&self, from: CityId) -> impl Iterator<Item = (CityId, Cost)> + '_ {
        self.routes
            .iter()
            .filter(move |&(&(f, _), _)| f == from)
            .map(|(&(_, to), &cost)| (to, cost))
    }

    /// The flight times recorded for a directed route, if any.
    pub fn flight_times(&self, from: CityId, to: CityId) -> Option<&TimeIndex> {
        self.schedules.get(&(from, to))
    }

    fn require(&self, id: CityId) -> Result<(), NetworkError> {
        if self.contains(id) {
            Ok(())
        } else {
            Err(NetworkError::UnknownCity(id))
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    proptest! {
        /// Every distinct id that was added is found; ids never added are not.
        #[test]
        fn lookup_finds_exactly_the_added_ids(ids in proptest::collection::hash_set(0u32..1000, 0..20)) {
            let mut network = RouteNetwork::new(NetworkConfig::new(ids.len().max(1)));
            for &id in &ids {
                network.add_city(CityId(id), format!("city-{id}")).unwrap();
            }

            for &id in &ids {
                prop_assert!(network.contains(CityId(id)));
            }
            let added: HashSet<u32> = ids.iter().copied().collect();
            for id in 0u32..1000 {
                if !added.contains(&id) {
                    prop_assert!(!network.contains(CityId(id)));
                }
            }
        }
    }
}
