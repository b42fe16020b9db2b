//! # Stayscape API Server
//!
//! Mock backend for the property-rental browsing and booking flow, built with
//! Rust and Actix Web.
//!
//! ## Main features
//!
//! - **Property listings**: full list and per-id detail over fixture data
//! - **Reviews**: per-property review lists
//! - **Bookings**: validated submissions answered with a fixed
//!   acknowledgement, nothing persisted
//! - **JSON API**: uniform `{error}` failure bodies, `Allow` headers on 405
//!
//! ## Configuration
//!
//! The server reads environment variables (`.env` supported):
//!
//! ```env
//! # Server
//! BIND_ADDRESS=0.0.0.0:8080
//!
//! # Logging
//! RUST_LOG=debug
//! ```
//!
//! ## Running
//!
//! ```bash
//! cargo run
//! # then e.g.
//! curl http://localhost:8080/api/properties
//! ```

use actix_web::{middleware::Logger, web, App, HttpServer};
use std::env;
use std::sync::Arc;

use stayscape::api;
use stayscape::db::{FixtureRepo, ListingStore};

/// Entry point of the API server
///
/// 1. Loads environment variables from `.env`
/// 2. Configures tracing-based logging
/// 3. Seeds the in-memory fixture store
/// 4. Starts the HTTP server with request logging and the API routes
///
/// # Environment variables
///
/// - `BIND_ADDRESS`: address and port to bind (default: 0.0.0.0:8080)
/// - `RUST_LOG`: log level (default: debug for the app)
///
/// # Errors
///
/// Returns `std::io::Error` when the configured address cannot be bound or
/// the server fails to start.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("stayscape=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting Stayscape API server...");

    // Handlers depend on the ListingStore trait, not on FixtureRepo
    let store: Arc<dyn ListingStore> = Arc::new(FixtureRepo::init());
    let store = web::Data::from(store);

    let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    tracing::info!("Server listening on {}", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .wrap(Logger::default())
            .configure(api::init_routes)
    })
    .bind(&bind_address)?
    .run()
    .await
}
