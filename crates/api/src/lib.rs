//! Parts catalog API server library.
//!
//! Exposes config, state, error handling, request gates and routes so the
//! binary entrypoint and integration tests share the same building blocks.

pub mod config;
pub mod error;
pub mod gates;
pub mod handlers;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
