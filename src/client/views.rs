//! # Fetch-driven views
//!
//! State holders for the property detail page, the booking page and the
//! review section. Each view issues one fetch per (re)load and tracks three
//! mutually exclusive render states through [`FetchState`].
//!
//! Re-triggering a load (the id changed) bumps a generation counter; a
//! response carrying a stale generation is discarded instead of overwriting
//! newer state, so rapid id changes cannot leave an old payload on screen.

use chrono::NaiveDate;

use super::gateway::BookingGateway;
use crate::db::{Property, Review};

/// Error shown when the review fetch fails
pub const REVIEWS_LOAD_ERROR: &str = "Failed to load reviews";

/// Error shown when the property fetch fails
pub const PROPERTY_LOAD_ERROR: &str = "Failed to load property details. Please try again later.";

/// Fixed per-booking fee shown in the order summary
pub const BOOKING_FEE: f64 = 65.0;

/// Render state of a fetching view
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Fetch in flight, nothing to render yet
    Loading,
    /// Fetch failed, render the carried message
    Failed(String),
    /// Fetch finished; the payload may be empty and still be a valid state
    Loaded(T),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The loaded payload, when there is one
    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Review list of one property
#[derive(Debug)]
pub struct ReviewSection {
    property_id: i32,
    generation: u64,
    state: FetchState<Vec<Review>>,
}

impl ReviewSection {
    pub fn new(property_id: i32) -> Self {
        ReviewSection {
            property_id,
            generation: 0,
            state: FetchState::Loading,
        }
    }

    pub fn property_id(&self) -> i32 {
        self.property_id
    }

    pub fn state(&self) -> &FetchState<Vec<Review>> {
        &self.state
    }

    /// Points the section at another property and resets it to loading
    pub fn set_property_id(&mut self, property_id: i32) {
        if property_id != self.property_id {
            self.property_id = property_id;
            self.state = FetchState::Loading;
        }
    }

    /// Marks the start of a fetch and returns its generation
    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    /// Applies a fetch result; stale generations are discarded
    pub fn finish_load(&mut self, generation: u64, result: anyhow::Result<Vec<Review>>) {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Discarding stale review response"
            );
            return;
        }

        self.state = match result {
            Ok(reviews) => FetchState::Loaded(reviews),
            Err(error) => {
                tracing::error!(error = %error, "Error fetching reviews");
                FetchState::Failed(REVIEWS_LOAD_ERROR.to_string())
            }
        };
    }

    /// One full load cycle against the gateway
    pub async fn refresh(&mut self, gateway: &dyn BookingGateway) {
        let generation = self.begin_load();
        let result = gateway.fetch_reviews(self.property_id).await;
        self.finish_load(generation, result);
    }

    /// Section heading, mirroring the page copy
    pub fn headline(&self) -> String {
        match &self.state {
            FetchState::Loading => "Loading reviews...".to_string(),
            FetchState::Failed(message) => message.clone(),
            FetchState::Loaded(reviews) if reviews.is_empty() => {
                "No reviews yet. Be the first to review!".to_string()
            }
            FetchState::Loaded(reviews) => format!("Reviews ({})", reviews.len()),
        }
    }
}

/// Property detail page: one property plus its review section
#[derive(Debug)]
pub struct PropertyDetailView {
    property_id: i32,
    generation: u64,
    state: FetchState<Property>,
    reviews: ReviewSection,
}

impl PropertyDetailView {
    pub fn new(property_id: i32) -> Self {
        PropertyDetailView {
            property_id,
            generation: 0,
            state: FetchState::Loading,
            reviews: ReviewSection::new(property_id),
        }
    }

    pub fn state(&self) -> &FetchState<Property> {
        &self.state
    }

    pub fn reviews(&self) -> &ReviewSection {
        &self.reviews
    }

    /// Navigates the view to another property
    pub fn set_property_id(&mut self, property_id: i32) {
        if property_id != self.property_id {
            self.property_id = property_id;
            self.state = FetchState::Loading;
            self.reviews.set_property_id(property_id);
        }
    }

    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    pub fn finish_load(&mut self, generation: u64, result: anyhow::Result<Property>) {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Discarding stale property response"
            );
            return;
        }

        self.state = match result {
            Ok(property) => FetchState::Loaded(property),
            Err(error) => {
                tracing::error!(error = %error, "Error fetching property");
                FetchState::Failed(PROPERTY_LOAD_ERROR.to_string())
            }
        };
    }

    /// Loads the property, then the review section for it
    pub async fn refresh(&mut self, gateway: &dyn BookingGateway) {
        let generation = self.begin_load();
        let result = gateway.fetch_property(self.property_id).await;
        self.finish_load(generation, result);

        if self.state.loaded().is_some() {
            self.reviews.refresh(gateway).await;
        }
    }
}

/// Order summary data derived from the fetched property
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub property_name: String,
    /// Nightly price
    pub price: f64,
    pub booking_fee: f64,
    pub total_nights: u32,
    /// Human-readable stay start, e.g. "24 August 2024"
    pub start_date: String,
    pub image: String,
}

impl OrderSummary {
    /// Grand total: nights times nightly price plus the booking fee
    pub fn total(&self) -> f64 {
        self.price * f64::from(self.total_nights) + self.booking_fee
    }
}

/// Booking page: property context for the order summary, plus the static
/// cancellation-policy copy
#[derive(Debug)]
pub struct BookingView {
    property_id: i32,
    generation: u64,
    state: FetchState<Property>,
}

impl BookingView {
    pub fn new(property_id: i32) -> Self {
        BookingView {
            property_id,
            generation: 0,
            state: FetchState::Loading,
        }
    }

    pub fn property_id(&self) -> i32 {
        self.property_id
    }

    pub fn state(&self) -> &FetchState<Property> {
        &self.state
    }

    pub fn begin_load(&mut self) -> u64 {
        self.generation += 1;
        self.state = FetchState::Loading;
        self.generation
    }

    pub fn finish_load(&mut self, generation: u64, result: anyhow::Result<Property>) {
        if generation != self.generation {
            tracing::debug!(
                stale = generation,
                current = self.generation,
                "Discarding stale property response"
            );
            return;
        }

        self.state = match result {
            Ok(property) => FetchState::Loaded(property),
            Err(error) => {
                tracing::error!(error = %error, "Error fetching property");
                FetchState::Failed(PROPERTY_LOAD_ERROR.to_string())
            }
        };
    }

    pub async fn refresh(&mut self, gateway: &dyn BookingGateway) {
        let generation = self.begin_load();
        let result = gateway.fetch_property(self.property_id).await;
        self.finish_load(generation, result);
    }

    /// Order summary for the current state
    ///
    /// Stay length and start date are fixed placeholders, like the form's
    /// stay parameters. While the property is not loaded the summary falls
    /// back to neutral values so the page can render regardless.
    pub fn order_summary(&self) -> OrderSummary {
        let start_date = NaiveDate::from_ymd_opt(2024, 8, 24)
            .unwrap()
            .format("%-d %B %Y")
            .to_string();

        let (property_name, price, image) = match &self.state {
            FetchState::Loaded(property) => (
                property.name.clone(),
                property.price,
                property.image.clone(),
            ),
            _ => (
                "Loading...".to_string(),
                0.0,
                "https://images.stayscape.example/placeholder.jpg".to_string(),
            ),
        };

        OrderSummary {
            property_name,
            price,
            booking_fee: BOOKING_FEE,
            total_nights: 3,
            start_date,
            image,
        }
    }

    /// Static cancellation-policy copy
    pub fn cancellation_policy() -> &'static str {
        "Free cancellation before Aug 23. Cancel before check-in on Aug 24 for partial refund."
    }

    /// Static ground-rules copy
    pub fn ground_rules() -> &'static [&'static str] {
        &[
            "Follow the house rules",
            "Treat your Host's home like your own",
        ]
    }
}
