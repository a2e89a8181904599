//! Domain entities and typed patches.
//!
//! All wire-facing structs use camelCase field names to match the
//! ConnectSphere JSON contract.

pub mod message;
pub mod post;
pub mod user;

pub use message::{Conversation, Message};
pub use post::{Comment, Post, PostPatch, MAX_CONTENT_LEN};
pub use user::{ProfileUser, User, UserPatch, UserSummary, MAX_BIO_LEN};
