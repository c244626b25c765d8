//! Route cost type.

use std::fmt;

/// Error returned when constructing an invalid route cost.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("route cost must be a positive integer")]
pub struct InvalidCost;

/// A validated positive route cost.
///
/// A zero cost means "no route" by convention and is rejected here, so
/// any `Cost` value stored in the network is a real, traversable edge.
///
/// # Examples
///
/// ```
/// use flight_server::domain::Cost;
///
/// let cost = Cost::new(400).unwrap();
/// assert_eq!(cost.get(), 400);
///
/// // Zero is rejected
/// assert!(Cost::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cost(u32);

impl Cost {
    /// Validate and construct a cost. Zero is rejected.
    pub fn new(value: u32) -> Result<Self, InvalidCost> {
        if value == 0 {
            return Err(InvalidCost);
        }
        Ok(Cost(value))
    }

    /// Returns the cost as a plain integer.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_costs_accepted() {
        assert_eq!(Cost::new(1).unwrap().get(), 1);
        assert_eq!(Cost::new(999).unwrap().get(), 999);
        assert_eq!(Cost::new(u32::MAX).unwrap().get(), u32::MAX);
    }

    #[test]
    fn zero_rejected() {
        assert_eq!(Cost::new(0), Err(InvalidCost));
    }

    #[test]
    fn error_display() {
        assert_eq!(
            InvalidCost.to_string(),
            "route cost must be a positive integer"
        );
    }

    #[test]
    fn ordering_follows_value() {
        assert!(Cost::new(2).unwrap() < Cost::new(5).unwrap());
    }
}
