// src/db/mod.rs
pub mod fixtures;
pub mod models;

pub use fixtures::{FixtureRepo, ListingStore};
pub use models::{Address, Offers, Property, Review};
