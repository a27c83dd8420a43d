//! Request handlers.
//!
//! Filter endpoints run the gates from [`crate::gates`] before touching the
//! database; the fixed-table endpoints only run pagination or id gates.
//! Rows are returned as plain JSON arrays.

pub mod customer;
pub mod inventory;
pub mod meta;
pub mod order;
pub mod part;
pub mod user;
