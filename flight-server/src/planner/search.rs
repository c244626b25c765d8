//! Cheapest-route search.
//!
//! Dijkstra's algorithm over the network's directed cost graph. All
//! route costs are positive, so the first time a city is taken off the
//! priority queue its distance is final, and the search can stop as
//! soon as that happens for the destination.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use tracing::debug;

use crate::domain::CityId;
use crate::network::RouteNetwork;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// The id does not name a known city.
    #[error("unknown city: {0}")]
    UnknownCity(CityId),

    /// The cities exist but no sequence of routes connects them.
    #[error("no route exists from city {from} to city {to}")]
    NoRoute { from: CityId, to: CityId },

    /// The route has no flight times recorded.
    #[error("no flight times recorded from city {from} to city {to}")]
    NoFlightTimes { from: CityId, to: CityId },
}

/// A found route: its total cost and every city along it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Sum of the edge costs along the route.
    pub total_cost: u32,

    /// Cities from source to destination inclusive.
    pub stops: Vec<CityId>,
}

/// Find the cheapest route from `from` to `to`.
///
/// Searching from a city to itself succeeds with cost 0 and a single
/// stop. When several routes share the minimum cost, the one returned
/// is whichever the queue happens to finalize first.
pub fn shortest_path(
    network: &RouteNetwork,
    from: CityId,
    to: CityId,
) -> Result<RouteSummary, SearchError> {
    if !network.contains(from) {
        return Err(SearchError::UnknownCity(from));
    }
    if !network.contains(to) {
        return Err(SearchError::UnknownCity(to));
    }

    // Best known distance per city; absent means unreached (infinite).
    let mut dist: HashMap<CityId, u32> = HashMap::new();
    // Back-pointers for path reconstruction.
    let mut parent: HashMap<CityId, CityId> = HashMap::new();
    // Cities whose distance is final.
    let mut finalized: HashSet<CityId> = HashSet::new();

    let mut queue: BinaryHeap<Reverse<(u32, CityId)>> = BinaryHeap::new();
    dist.insert(from, 0);
    queue.push(Reverse((0, from)));

    while let Some(Reverse((cost, city))) = queue.pop() {
        // A city's distance may be pushed several times before it is
        // finalized; only the first (smallest) pop counts.
        if !finalized.insert(city) {
            continue;
        }

        if city == to {
            break;
        }

        for (neighbor, edge) in network.departures_from(city) {
            if finalized.contains(&neighbor) {
                continue;
            }
            let candidate = cost.saturating_add(edge.get());
            let best = dist.get(&neighbor).copied().unwrap_or(u32::MAX);
            if candidate < best {
                dist.insert(neighbor, candidate);
                parent.insert(neighbor, city);
                queue.push(Reverse((candidate, neighbor)));
            }
        }
    }

    let Some(&total_cost) = dist.get(&to) else {
        debug!(%from, %to, settled = finalized.len(), "no route found");
        return Err(SearchError::NoRoute { from, to });
    };

    // Walk the back-pointers from the destination, then flip.
    let mut stops = vec![to];
    let mut current = to;
    while let Some(&previous) = parent.get(&current) {
        stops.push(previous);
        current = previous;
    }
    stops.reverse();

    debug!(
        %from,
        %to,
        total_cost,
        stops = stops.len(),
        settled = finalized.len(),
        "cheapest route found"
    );

    Ok(RouteSummary { total_cost, stops })
}
