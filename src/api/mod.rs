//! # API module
//!
//! Routes and handlers of the REST surface.
//!
//! ## Main modules
//!
//! - [`property`] - property listing and detail endpoints
//! - [`review`] - per-property review endpoint
//! - [`booking`] - booking submission endpoint
//! - [`errors`] - application error handling

pub mod booking;
pub mod errors;
mod middleware;
pub mod property;
pub mod review;

// Re-export common types for convenient use
pub use errors::{AppError, AppResult, ErrorResponse};
pub use middleware::ErrorLogExt;

use actix_web::{web, HttpResponse};

/// Fallback handler for routes that only accept GET
pub(crate) async fn get_only_fallback() -> AppResult<HttpResponse> {
    Err(AppError::method_not_allowed("GET"))
}

/// Fallback handler for routes that only accept POST
pub(crate) async fn post_only_fallback() -> AppResult<HttpResponse> {
    Err(AppError::method_not_allowed("POST"))
}

/// Configures every API route
///
/// ## Configured routes
///
/// - `GET /api/properties` - see [`property::routes`]
/// - `GET /api/properties/{id}` - see [`property::routes`]
/// - `GET /api/properties/{id}/reviews` - see [`review::routes`]
/// - `POST /api/bookings` - see [`booking::routes`]
///
/// Also installs a JSON extractor error handler so malformed request bodies
/// answer with the `{error}` shape instead of the framework default.
///
/// # Parameters
///
/// - `cfg`: Actix Web service configuration the routes are registered on
///
/// # Example
///
/// ```no_run
/// use actix_web::App;
/// use stayscape::api;
///
/// let app = App::new().configure(api::init_routes);
/// ```
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        AppError::Validation(format!("Invalid request body: {}", err)).into()
    }));

    property::routes(cfg);
    review::routes(cfg);
    booking::routes(cfg);
}
