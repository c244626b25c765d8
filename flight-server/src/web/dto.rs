//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::City;

/// Request to add a city.
#[derive(Debug, Deserialize)]
pub struct AddCityRequest {
    /// Caller-assigned city id
    pub id: u32,

    /// City name
    pub name: String,
}

/// Request to add or update a directed route.
#[derive(Debug, Deserialize)]
pub struct SetRouteRequest {
    /// Source city id
    pub from: u32,

    /// Destination city id
    pub to: u32,

    /// Route cost; must be positive
    pub cost: u32,
}

/// Request to record a flight time on a directed route.
#[derive(Debug, Deserialize)]
pub struct AddFlightTimeRequest {
    /// Source city id
    pub from: u32,

    /// Destination city id
    pub to: u32,

    /// Scheduled time, e.g. 1730 for 5:30 PM
    pub time: u32,
}

/// A city in responses.
#[derive(Debug, Serialize)]
pub struct CityResult {
    /// City id
    pub id: u32,

    /// City name
    pub name: String,
}

impl CityResult {
    /// Build from a domain city.
    pub fn from_city(city: &City) -> Self {
        Self {
            id: city.id.0,
            name: city.name.clone(),
        }
    }
}

/// Response listing all cities.
#[derive(Debug, Serialize)]
pub struct CitiesResponse {
    /// Cities in the order they were added
    pub cities: Vec<CityResult>,
}

/// A directed route in responses.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    /// Source city
    pub from: CityResult,

    /// Destination city
    pub to: CityResult,

    /// Route cost
    pub cost: u32,
}

/// Response listing all routes.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// All directed routes
    pub routes: Vec<RouteResult>,
}

/// Query parameters for planning a route.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Source city id
    pub from: u32,

    /// Destination city id
    pub to: u32,
}

/// A planned route.
#[derive(Debug, Serialize)]
pub struct PlannedRouteResponse {
    /// Sum of edge costs along the route
    pub total_cost: u32,

    /// Cities from source to destination inclusive
    pub stops: Vec<CityResult>,
}

/// Query parameters for listing a route's flight times.
#[derive(Debug, Deserialize)]
pub struct FlightTimesRequest {
    /// Source city id
    pub from: u32,

    /// Destination city id
    pub to: u32,
}

/// Response listing a route's flight times.
#[derive(Debug, Serialize)]
pub struct FlightTimesResponse {
    /// Recorded times in ascending order; empty if none recorded
    pub times: Vec<u32>,
}

/// Query parameters for the closest-flight lookup.
#[derive(Debug, Deserialize)]
pub struct ClosestFlightRequest {
    /// Source city id
    pub from: u32,

    /// Destination city id
    pub to: u32,

    /// Desired departure time
    pub time: u32,
}

/// Response for the closest-flight lookup.
#[derive(Debug, Serialize)]
pub struct ClosestFlightResponse {
    /// The recorded time closest to the desired time
    pub time: u32,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CityId;

    #[test]
    fn city_result_copies_id_and_name() {
        let city = City::new(CityId(3), "Quetta");
        let result = CityResult::from_city(&city);
        assert_eq!(result.id, 3);
        assert_eq!(result.name, "Quetta");
    }

    #[test]
    fn planned_route_serializes_with_expected_fields() {
        let response = PlannedRouteResponse {
            total_cost: 5,
            stops: vec![
                CityResult {
                    id: 1,
                    name: "A".to_string(),
                },
                CityResult {
                    id: 2,
                    name: "B".to_string(),
                },
            ],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["total_cost"], 5);
        assert_eq!(value["stops"][1]["name"], "B");
    }

    #[test]
    fn set_route_request_parses() {
        let req: SetRouteRequest =
            serde_json::from_str(r#"{"from": 1, "to": 2, "cost": 400}"#).unwrap();
        assert_eq!(req.from, 1);
        assert_eq!(req.to, 2);
        assert_eq!(req.cost, 400);
    }
}
