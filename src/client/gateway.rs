//! # HTTP gateway
//!
//! The client views talk to the API through the [`BookingGateway`] trait so
//! tests can substitute stub transports. [`HttpGateway`] is the production
//! implementation over reqwest.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use crate::api::booking::BookingSubmission;
use crate::api::ErrorLogExt;
use crate::db::{Property, Review};

/// Acknowledgement returned by a successful booking submission
#[derive(Debug, Clone, Deserialize)]
pub struct BookingAck {
    pub message: String,
}

/// Transport used by the client views and the booking form
#[async_trait]
pub trait BookingGateway: Send + Sync {
    /// Fetches one property by id
    async fn fetch_property(&self, id: i32) -> Result<Property>;

    /// Fetches the reviews of one property
    async fn fetch_reviews(&self, property_id: i32) -> Result<Vec<Review>>;

    /// Posts a booking submission
    async fn submit_booking(&self, payload: &BookingSubmission) -> Result<BookingAck>;
}

/// reqwest-backed [`BookingGateway`] against a base URL
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Creates a gateway for `base_url`, e.g. `http://localhost:8080`
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpGateway {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl BookingGateway for HttpGateway {
    async fn fetch_property(&self, id: i32) -> Result<Property> {
        let response = self
            .client
            .get(self.url(&format!("/api/properties/{}", id)))
            .send()
            .await
            .log_error_context("fetching property")?;

        response
            .error_for_status()
            .log_error_context("fetching property")?
            .json()
            .await
            .context("decoding property response")
    }

    async fn fetch_reviews(&self, property_id: i32) -> Result<Vec<Review>> {
        let response = self
            .client
            .get(self.url(&format!("/api/properties/{}/reviews", property_id)))
            .send()
            .await
            .log_error_context("fetching reviews")?;

        response
            .error_for_status()
            .log_error_context("fetching reviews")?
            .json()
            .await
            .context("decoding reviews response")
    }

    async fn submit_booking(&self, payload: &BookingSubmission) -> Result<BookingAck> {
        let response = self
            .client
            .post(self.url("/api/bookings"))
            .json(payload)
            .send()
            .await
            .log_error_context("submitting booking")?;

        response
            .error_for_status()
            .log_error_context("submitting booking")?
            .json()
            .await
            .context("decoding booking acknowledgement")
    }
}
