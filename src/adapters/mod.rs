//! Production and mock implementations of the crate's trait abstractions.

pub mod file_token_store;
pub mod mock;
pub mod reqwest_http;

pub use file_token_store::FileTokenStore;
pub use reqwest_http::ReqwestHttpClient;
