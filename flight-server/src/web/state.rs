//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::network::RouteNetwork;

/// Shared application state.
///
/// The network itself is single-threaded and unsynchronized; the lock
/// here is the external synchronization concurrent handlers need.
/// Handlers finish all network work before producing a response, so the
/// lock is never held across an await on I/O.
#[derive(Clone)]
pub struct AppState {
    /// The route network, write-locked for mutation.
    pub network: Arc<RwLock<RouteNetwork>>,
}

impl AppState {
    /// Create a new app state around a network.
    pub fn new(network: RouteNetwork) -> Self {
        Self {
            network: Arc::new(RwLock::new(network)),
        }
    }
}
