//! City identity types.

use std::fmt;

/// Caller-assigned identifier for a city.
///
/// Ids are plain integers chosen by whoever populates the network; the
/// network enforces uniqueness at insertion, not this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CityId(pub u32);

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A city known to the network.
///
/// Cities are immutable once created: they are added exactly once and
/// live for the lifetime of the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    /// Unique identifier.
    pub id: CityId,

    /// Human-readable name, used when rendering routes.
    pub name: String,
}

impl City {
    /// Create a new city.
    pub fn new(id: CityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_id() {
        assert_eq!(CityId(7).to_string(), "7");
        assert_eq!(CityId(0).to_string(), "0");
    }

    #[test]
    fn equality() {
        assert_eq!(CityId(3), CityId(3));
        assert_ne!(CityId(3), CityId(4));
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(CityId(3));
        assert!(set.contains(&CityId(3)));
        assert!(!set.contains(&CityId(4)));
    }

    #[test]
    fn city_construction() {
        let city = City::new(CityId(1), "Karachi");
        assert_eq!(city.id, CityId(1));
        assert_eq!(city.name, "Karachi");
    }
}
