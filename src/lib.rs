//! Sakila API - a read-only HTTP lookup service over the Sakila sample database
//!
//! The service exposes three lookups over a pre-existing MySQL schema:
//! - Film details by film id
//! - Actors of a film, each with their other film appearances
//! - Inventory rows of a film, denormalized with the film title
//!
//! Every request is stateless: resolve the path parameter, run one or two
//! parameterized queries against a shared connection pool, shape the rows
//! into JSON, and return 200 or 404.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
