//! ConnectSphere client core.
//!
//! This library contains everything behind the ConnectSphere UI that isn't
//! rendering: the domain models, the REST API modules, and the four state
//! containers (auth, posts, profile, messages) composed into a single
//! [`state::Store`]. The view layer drives it all through [`app::AppClient`].

pub mod adapters;
pub mod api;
pub mod app;
pub mod format;
pub mod models;
pub mod prelude;
pub mod state;
pub mod traits;
