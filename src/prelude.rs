//! Prelude module for convenient imports.
//!
//! ```ignore
//! use connectsphere::prelude::*;
//! ```

// Facade
pub use crate::app::{AppClient, PAGE_SIZE};

// API
pub use crate::api::{ApiClient, ApiError, DEFAULT_BASE_URL};

// Model types
pub use crate::models::{
    Comment, Conversation, Message, Post, PostPatch, ProfileUser, User, UserPatch, UserSummary,
};

// State types
pub use crate::state::{
    Action, AuthAction, AuthState, MessagesAction, MessagesState, PostsAction, PostsState,
    ProfileAction, ProfileState, Store,
};

// Traits and production adapters
pub use crate::adapters::{FileTokenStore, ReqwestHttpClient};
pub use crate::traits::{HttpClient, HttpError, TokenStore, TokenStoreError};
