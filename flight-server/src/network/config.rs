//! Network configuration.

/// Configuration parameters for the route network.
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    /// Maximum number of cities the network will accept.
    /// Adding a city beyond this bound fails.
    pub max_cities: usize,
}

impl NetworkConfig {
    /// Create a configuration with the given capacity bound.
    pub fn new(max_cities: usize) -> Self {
        Self { max_cities }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { max_cities: 32 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = NetworkConfig::default();
        assert_eq!(config.max_cities, 32);
    }

    #[test]
    fn custom_config() {
        let config = NetworkConfig::new(5);
        assert_eq!(config.max_cities, 5);
    }
}
