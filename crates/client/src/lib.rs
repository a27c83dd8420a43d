//! Client-side filter assembly for the parts catalog API.
//!
//! Turns loosely shaped caller input into a minimal query string, checks
//! resource and category names against allow-lists before any request is
//! sent, and wraps the catalog endpoints in [`PartsClient`].

pub mod allow;
pub mod api;
pub mod error;
pub mod query;
pub mod terms;

pub use api::PartsClient;
pub use error::ClientError;
