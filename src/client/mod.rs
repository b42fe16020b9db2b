//! # Client layer
//!
//! Frontend stand-in for the browsing and booking flow: fetch-driven view
//! state holders and the booking form state machine, wired to the API
//! through the [`gateway::BookingGateway`] trait.

pub mod form;
pub mod gateway;
pub mod views;

pub use form::{BookingForm, FormFields, FormStatus};
pub use gateway::{BookingAck, BookingGateway, HttpGateway};
pub use views::{BookingView, FetchState, OrderSummary, PropertyDetailView, ReviewSection};
