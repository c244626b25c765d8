//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::domain::{CityId, Cost, InvalidCost};
use crate::network::NetworkError;
use crate::planner::{FlightPlanner, SearchError};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/cities", post(add_city).get(list_cities))
        .route("/routes", post(set_route).get(list_routes))
        .route("/routes/plan", get(plan_route))
        .route("/flight-times", post(add_flight_time).get(list_flight_times))
        .route("/flight-times/closest", get(closest_flight))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Add a city to the network.
async fn add_city(
    State(state): State<AppState>,
    Json(req): Json<AddCityRequest>,
) -> Result<StatusCode, AppError> {
    let mut network = state.network.write().await;
    network.add_city(CityId(req.id), req.name)?;
    Ok(StatusCode::CREATED)
}

/// List all cities in insertion order.
async fn list_cities(State(state): State<AppState>) -> Json<CitiesResponse> {
    let network = state.network.read().await;
    let cities = network.cities().iter().map(CityResult::from_city).collect();
    Json(CitiesResponse { cities })
}

/// Add or update a directed route.
async fn set_route(
    State(state): State<AppState>,
    Json(req): Json<SetRouteRequest>,
) -> Result<StatusCode, AppError> {
    let cost = Cost::new(req.cost)?;
    let mut network = state.network.write().await;
    network.set_route(CityId(req.from), CityId(req.to), cost)?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all directed routes.
async fn list_routes(State(state): State<AppState>) -> Json<RoutesResponse> {
    let network = state.network.read().await;

    let mut routes: Vec<RouteResult> = network
        .routes()
        .filter_map(|(from, to, cost)| {
            // Both cities exist: routes can only be set between them.
            let from = network.city(from)?;
            let to = network.city(to)?;
            Some(RouteResult {
                from: CityResult::from_city(from),
                to: CityResult::from_city(to),
                cost: cost.get(),
            })
        })
        .collect();

    // Route storage is unordered; present a stable listing.
    routes.sort_by_key(|r| (r.from.id, r.to.id));

    Json(RoutesResponse { routes })
}

/// Plan the cheapest route between two cities.
async fn plan_route(
    State(state): State<AppState>,
    Query(req): Query<PlanRouteRequest>,
) -> Result<Json<PlannedRouteResponse>, AppError> {
    let network = state.network.read().await;
    let planner = FlightPlanner::new(&network);
    let summary = planner.find_route(CityId(req.from), CityId(req.to))?;

    let stops = summary
        .stops
        .iter()
        .filter_map(|&id| network.city(id))
        .map(CityResult::from_city)
        .collect();

    Ok(Json(PlannedRouteResponse {
        total_cost: summary.total_cost,
        stops,
    }))
}

/// Record a flight time on a directed route.
async fn add_flight_time(
    State(state): State<AppState>,
    Json(req): Json<AddFlightTimeRequest>,
) -> Result<StatusCode, AppError> {
    let mut network = state.network.write().await;
    network.add_flight_time(CityId(req.from), CityId(req.to), req.time)?;
    Ok(StatusCode::NO_CONTENT)
}

/// List a route's flight times in ascending order.
async fn list_flight_times(
    State(state): State<AppState>,
    Query(req): Query<FlightTimesRequest>,
) -> Result<Json<FlightTimesResponse>, AppError> {
    let network = state.network.read().await;

    for id in [req.from, req.to] {
        if !network.contains(CityId(id)) {
            return Err(AppError::NotFound {
                message: format!("unknown city: {id}"),
            });
        }
    }

    let times = network
        .flight_times(CityId(req.from), CityId(req.to))
        .map(|index| index.iter().collect())
        .unwrap_or_default();

    Ok(Json(FlightTimesResponse { times }))
}

/// Find the flight time closest to the desired time.
async fn closest_flight(
    State(state): State<AppState>,
    Query(req): Query<ClosestFlightRequest>,
) -> Result<Json<ClosestFlightResponse>, AppError> {
    let network = state.network.read().await;
    let planner = FlightPlanner::new(&network);
    let time = planner.closest_departure(CityId(req.from), CityId(req.to), req.time)?;
    Ok(Json(ClosestFlightResponse { time }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
}

impl From<InvalidCost> for AppError {
    fn from(e: InvalidCost) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<NetworkError> for AppError {
    fn from(e: NetworkError) -> Self {
        match e {
            NetworkError::UnknownCity(_) => AppError::NotFound {
                message: e.to_string(),
            },
            NetworkError::DuplicateCity(_) | NetworkError::CapacityExceeded { .. } => {
                AppError::Conflict {
                    message: e.to_string(),
                }
            }
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        AppError::NotFound {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
        };

        // Log errors to stderr for debugging
        eprintln!("[{status}] {message}");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
