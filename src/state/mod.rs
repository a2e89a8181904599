//! Client-side application state.
//!
//! Four independent slices (auth, posts, profile, messages), each a plain
//! state struct with a reducer over a typed action enum, composed by
//! [`Store`]. Slices never read or write each other; the only coupling is
//! that the profile slice reuses the [`crate::models::Post`] entity shape.
//!
//! All mutations run synchronously through [`Store::dispatch`]; network
//! calls complete first and dispatch their results afterwards, so no two
//! mutations interleave.

pub mod auth;
pub mod messages;
pub mod posts;
pub mod profile;
pub mod store;

pub use auth::{AuthAction, AuthState};
pub use messages::{MessagesAction, MessagesState};
pub use posts::{PostsAction, PostsState};
pub use profile::{ProfileAction, ProfileState};
pub use store::{Action, Store};
