//! # Property API
//!
//! Read-only endpoints over the property fixture:
//! - Listing every property
//! - Fetching a single property by id
//!
//! Both routes are GET-only; any other method is answered with 405 and an
//! `Allow: GET` header.

use actix_web::{web, HttpResponse, Responder};

use super::{AppError, AppResult};
use crate::db::ListingStore;

/// Lists every property
///
/// # Response
/// `200 OK` with the full fixture array, in fixture order:
/// ```json
/// [
///   { "id": 1, "name": "Villa Ocean Breeze", "price": 3200.0, ... }
/// ]
/// ```
pub async fn list_properties(store: web::Data<dyn ListingStore>) -> AppResult<impl Responder> {
    Ok(HttpResponse::Ok().json(store.list_properties()))
}

/// Fetches one property by id
///
/// The id comes from the path and is coerced to an integer. An id that does
/// not parse can never match a record, so it falls into the not-found case
/// like any unknown id.
///
/// # Response
/// `200 OK` with the matching property.
///
/// # Errors
/// - `404 Not Found`: no property with that id
/// - `405 Method Not Allowed`: non-GET request
pub async fn get_property(
    store: web::Data<dyn ListingStore>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let property = path
        .parse::<i32>()
        .ok()
        .and_then(|id| store.get_property(id))
        .ok_or_else(|| AppError::NotFound("Property not found".to_string()))?;

    Ok(HttpResponse::Ok().json(property))
}

/// Configures the property routes
///
/// # Routes
/// - `GET /api/properties` - list every property
/// - `GET /api/properties/{id}` - fetch one property
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/properties")
            .route(web::get().to(list_properties))
            .default_service(web::to(super::get_only_fallback)),
    );
    cfg.service(
        web::resource("/api/properties/{id}")
            .route(web::get().to(get_property))
            .default_service(web::to(super::get_only_fallback)),
    );
}
