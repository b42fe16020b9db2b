//! # In-memory fixture store
//!
//! The listing data lives in static in-memory arrays seeded at startup.
//! Handlers never talk to the arrays directly, they go through the
//! [`ListingStore`] trait so a real storage layer can be substituted later
//! without touching the endpoint contracts.

use chrono::NaiveDate;

use super::models::{Address, Offers, Property, Review};

/// Read-only data access used by the API handlers
///
/// Implementations must preserve insertion order for listings and reviews.
pub trait ListingStore: Send + Sync {
    /// Every property, in fixture order
    fn list_properties(&self) -> &[Property];

    /// One property by id, `None` when no record matches
    fn get_property(&self, id: i32) -> Option<Property>;

    /// Reviews for one property, in fixture order; empty when none match
    fn list_reviews(&self, property_id: i32) -> Vec<Review>;
}

/// Fixture-backed [`ListingStore`]
///
/// Holds the seeded sample data; created once in `main` and shared behind
/// an `Arc`.
#[derive(Debug)]
pub struct FixtureRepo {
    properties: Vec<Property>,
    reviews: Vec<Review>,
}

impl FixtureRepo {
    /// Builds the repository from the built-in sample listings
    pub fn init() -> Self {
        let repo = FixtureRepo {
            properties: sample_properties(),
            reviews: sample_reviews(),
        };

        tracing::info!(
            properties = repo.properties.len(),
            reviews = repo.reviews.len(),
            "Fixture store seeded"
        );

        repo
    }
}

impl ListingStore for FixtureRepo {
    fn list_properties(&self) -> &[Property] {
        &self.properties
    }

    fn get_property(&self, id: i32) -> Option<Property> {
        self.properties.iter().find(|p| p.id == id).cloned()
    }

    fn list_reviews(&self, property_id: i32) -> Vec<Review> {
        self.reviews
            .iter()
            .filter(|r| r.property_id == property_id)
            .cloned()
            .collect()
    }
}

fn property(
    id: i32,
    name: &str,
    image: &str,
    (state, city, country): (&str, &str, &str),
    rating: f32,
    category: &[&str],
    (bed, shower, occupants): (&str, &str, &str),
    price: f64,
    discount: Option<&str>,
) -> Property {
    Property {
        id,
        name: name.to_string(),
        image: image.to_string(),
        address: Address {
            state: state.to_string(),
            city: city.to_string(),
            country: country.to_string(),
        },
        rating,
        category: category.iter().map(|c| c.to_string()).collect(),
        offers: Offers {
            bed: bed.to_string(),
            shower: shower.to_string(),
            occupants: occupants.to_string(),
        },
        price,
        discount: discount.map(|d| d.to_string()),
    }
}

/// Sample property listings, mirroring the marketing sample data
fn sample_properties() -> Vec<Property> {
    vec![
        property(
            1,
            "Villa Ocean Breeze",
            "https://images.stayscape.example/villa-ocean-breeze.jpg",
            ("Seminyak", "Bali", "Indonesia"),
            4.89,
            &["Luxury Villa", "Pool", "Free Parking"],
            ("3", "3", "4-6"),
            3200.0,
            Some("30"),
        ),
        property(
            2,
            "Mountain Escape Chalet",
            "https://images.stayscape.example/mountain-escape-chalet.jpg",
            ("Aspen", "Colorado", "USA"),
            4.70,
            &["Mountain View", "Fireplace", "Self Checkin"],
            ("4", "2", "5-7"),
            1800.0,
            None,
        ),
        property(
            3,
            "Cozy Desert Retreat",
            "https://images.stayscape.example/cozy-desert-retreat.jpg",
            ("Palm Springs", "California", "USA"),
            4.92,
            &["Desert View", "Pet Friendly", "Self Checkin"],
            ("2", "1", "2-3"),
            1500.0,
            None,
        ),
        property(
            4,
            "City Lights Penthouse",
            "https://images.stayscape.example/city-lights-penthouse.jpg",
            ("New York", "New York", "USA"),
            4.85,
            &["City View", "Free WiFi", "24h Checkin"],
            ("2", "2", "2-4"),
            4500.0,
            Some("15"),
        ),
        property(
            5,
            "Riverside Cabin",
            "https://images.stayscape.example/riverside-cabin.jpg",
            ("Queenstown", "Otago", "New Zealand"),
            4.77,
            &["Riverside", "Private Dock", "Free Kayaks"],
            ("3", "2", "4-6"),
            2800.0,
            Some("20"),
        ),
        property(
            6,
            "Modern Beachfront Villa",
            "https://images.stayscape.example/modern-beachfront-villa.jpg",
            ("Sidemen", "Bali", "Indonesia"),
            4.94,
            &["Beachfront", "Private Pool", "Chef Service"],
            ("5", "5", "8-10"),
            5000.0,
            None,
        ),
    ]
}

/// Sample reviews: two for the first property, matching the upstream mock
fn sample_reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            property_id: 1,
            author: "John Doe".to_string(),
            rating: 5,
            comment: "Amazing villa with breathtaking views!".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        },
        Review {
            id: 2,
            property_id: 1,
            author: "Jane Smith".to_string(),
            rating: 4,
            comment: "Great location and amenities. Highly recommended!".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_property_round_trips_stored_record() {
        let repo = FixtureRepo::init();
        for expected in repo.list_properties().to_vec() {
            let found = repo.get_property(expected.id).unwrap();
            assert_eq!(found, expected);
        }
    }

    #[test]
    fn get_property_unknown_id_is_none() {
        let repo = FixtureRepo::init();
        assert!(repo.get_property(999).is_none());
        assert!(repo.get_property(-1).is_none());
    }

    #[test]
    fn reviews_filtered_by_property_in_fixture_order() {
        let repo = FixtureRepo::init();
        let reviews = repo.list_reviews(1);
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0].author, "John Doe");
        assert_eq!(reviews[1].author, "Jane Smith");
    }

    #[test]
    fn reviews_for_unreviewed_property_are_empty() {
        let repo = FixtureRepo::init();
        assert!(repo.list_reviews(2).is_empty());
        assert!(repo.list_reviews(999).is_empty());
    }

    #[test]
    fn fixture_ids_are_unique_and_reviews_resolve() {
        let repo = FixtureRepo::init();
        let mut ids: Vec<i32> = repo.list_properties().iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), repo.list_properties().len());

        // Advisory referential integrity: every seeded review must display
        for review in repo.list_reviews(1) {
            assert!(repo.get_property(review.property_id).is_some());
        }
    }

    #[test]
    fn property_serializes_with_camel_case_and_optional_discount() {
        let repo = FixtureRepo::init();
        let with_discount = serde_json::to_value(repo.get_property(1).unwrap()).unwrap();
        assert_eq!(with_discount["discount"], "30");
        assert_eq!(with_discount["offers"]["occupants"], "4-6");

        let without_discount = serde_json::to_value(repo.get_property(2).unwrap()).unwrap();
        assert!(without_discount.get("discount").is_none());
    }

    #[test]
    fn review_date_serializes_as_iso_day() {
        let repo = FixtureRepo::init();
        let review = serde_json::to_value(&repo.list_reviews(1)[0]).unwrap();
        assert_eq!(review["date"], "2024-01-15");
        assert_eq!(review["propertyId"], 1);
    }
}
