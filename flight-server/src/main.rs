use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use flight_server::network::{NetworkConfig, RouteNetwork};
use flight_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // The network starts empty; cities and routes are added over HTTP.
    let network = RouteNetwork::new(NetworkConfig::default());
    let state = AppState::new(network);

    // Create router
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Flight Route Planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                - Health check");
    println!("  POST /cities                - Add a city");
    println!("  GET  /cities                - List cities");
    println!("  POST /routes                - Add or update a route");
    println!("  GET  /routes                - List routes");
    println!("  GET  /routes/plan           - Plan the cheapest route");
    println!("  POST /flight-times          - Record a flight time");
    println!("  GET  /flight-times          - List a route's flight times");
    println!("  GET  /flight-times/closest  - Closest flight to a time");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
