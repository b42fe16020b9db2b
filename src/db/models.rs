//! # Listing data models
//!
//! Wire-level records served by the API. All of them are immutable fixture
//! data: they are seeded once at startup and never mutated at runtime.
//!
//! Field names on the wire are camelCase to match the frontend contract.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Postal address of a property, down to country level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Address {
    pub state: String,
    pub city: String,
    pub country: String,
}

/// What a property offers, as display strings
///
/// The values are strings rather than numbers because the frontend renders
/// ranges like `"4-6"` for occupants. Kept verbatim from the sample data.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Offers {
    /// Bed count, e.g. `"3"`
    pub bed: String,
    /// Shower count, e.g. `"2"`
    pub shower: String,
    /// Occupant capacity, e.g. `"4-6"`
    pub occupants: String,
}

/// A rentable property listing
///
/// # Example wire form
///
/// ```json
/// {
///   "id": 1,
///   "name": "Villa Ocean Breeze",
///   "image": "https://images.stayscape.example/villa-ocean-breeze.jpg",
///   "address": { "state": "Seminyak", "city": "Bali", "country": "Indonesia" },
///   "rating": 4.89,
///   "category": ["Luxury Villa", "Pool", "Free Parking"],
///   "offers": { "bed": "3", "shower": "3", "occupants": "4-6" },
///   "price": 3200.0,
///   "discount": "30"
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    /// Unique listing id
    pub id: i32,
    pub name: String,
    /// Image URI
    pub image: String,
    pub address: Address,
    /// Average rating, 0.0 to 5.0
    pub rating: f32,
    /// Category labels, e.g. "Beachfront", "Self Checkin"
    pub category: Vec<String>,
    pub offers: Offers,
    /// Nightly price
    pub price: f64,
    /// Discount percentage as a string, absent when no promotion runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
}

/// A guest review attached to a property
///
/// `property_id` is advisory only: nothing enforces that it references an
/// existing [`Property`], a dangling review simply never gets displayed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Unique review id
    pub id: i32,
    /// Id of the reviewed property
    pub property_id: i32,
    pub author: String,
    /// Star rating, 1 to 5
    pub rating: i32,
    pub comment: String,
    /// Review date, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}
