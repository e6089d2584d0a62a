//! Catalog transport layer.
//!
//! Everything that knows the external movie catalog's HTTP surface and JSON
//! shapes: the client, the wire models, and the [`crate::fetch::Lookup`]
//! implementations that plug the two subject kinds into the coordinator.
//!
//! # Modules
//!
//! - [`client`]: reqwest-based GET transport with cooperative cancellation
//! - [`wire`]: serde models of the catalog's JSON bodies
//! - [`lookups`]: search and detail lookup capabilities

pub mod client;
pub mod lookups;
pub mod wire;

pub use client::OmdbClient;
pub use lookups::{DetailLookup, SearchLookup};
