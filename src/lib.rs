//! # Stayscape
//!
//! Property-rental browsing and booking demo, split in two halves:
//!
//! - [`api`] + [`db`]: an Actix Web server exposing mock property, review
//!   and booking endpoints over immutable in-memory fixtures
//! - [`client`]: the frontend stand-in, fetch-driven views and the booking
//!   form state machine posting against those endpoints
//!
//! The server binary lives in `src/main.rs`, a client walkthrough in
//! `src/bin/booking_demo.rs`.

pub mod api;
pub mod client;
pub mod db;
