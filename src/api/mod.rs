//! API Module
//!
//! Client side of the REST service.
//!
//! # Endpoints
//! - `GET /location-area/` - Paginated list of location areas
//! - `GET /location-area/{name}` - A single location area and its encounters

pub mod client;

pub use client::PokeApiClient;
