//! Core building blocks of the parts catalog filter pipeline.
//!
//! Everything in here is pure logic with no I/O so it can be shared by the
//! HTTP server, the repository layer and the client-side query assembler.

pub mod catalog;
pub mod error;
pub mod filter;
pub mod params;
pub mod route_table;
pub mod schema;
pub mod search_terms;
pub mod types;
