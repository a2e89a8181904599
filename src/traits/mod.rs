//! Trait abstractions for dependency injection.
//!
//! The transport ([`HttpClient`]) and the durable session token
//! ([`TokenStore`]) sit behind traits so that production adapters and test
//! mocks are interchangeable.

pub mod http;
pub mod token_store;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use token_store::{TokenStore, TokenStoreError};
