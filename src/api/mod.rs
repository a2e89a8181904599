//! Thin API modules, one per domain.
//!
//! Each function maps one domain operation to one HTTP call through the
//! shared [`ApiClient`]. Input validation happens here, before any request
//! is issued.

pub mod auth;
pub mod client;
pub mod images;
pub mod messages;
pub mod posts;
pub mod profile;

pub use client::{ApiClient, ApiError, DEFAULT_BASE_URL};
