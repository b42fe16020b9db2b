//! # Review API
//!
//! Serves the reviews of a single property. An empty result is a normal
//! outcome, not an error: a property without reviews answers `200 []`.

use actix_web::{web, HttpResponse, Responder};

use super::AppResult;
use crate::db::ListingStore;

/// Lists the reviews of one property
///
/// Returns the subsequence of the review fixture whose property id matches,
/// in fixture order. An id that does not parse matches nothing and yields an
/// empty array, mirroring the upstream number coercion.
///
/// # Response
/// ```json
/// [
///   {
///     "id": 1,
///     "propertyId": 1,
///     "author": "John Doe",
///     "rating": 5,
///     "comment": "Amazing villa with breathtaking views!",
///     "date": "2024-01-15"
///   }
/// ]
/// ```
///
/// # Errors
/// - `405 Method Not Allowed`: non-GET request
pub async fn list_property_reviews(
    store: web::Data<dyn ListingStore>,
    path: web::Path<String>,
) -> AppResult<impl Responder> {
    let reviews = path
        .parse::<i32>()
        .map(|id| store.list_reviews(id))
        .unwrap_or_default();

    Ok(HttpResponse::Ok().json(reviews))
}

/// Configures the review routes
///
/// # Routes
/// - `GET /api/properties/{id}/reviews` - reviews of one property
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/api/properties/{id}/reviews")
            .route(web::get().to(list_property_reviews))
            .default_service(web::to(super::get_only_fallback)),
    );
}
