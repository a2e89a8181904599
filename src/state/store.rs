//! The composed store: all four slices behind one dispatch entry point.

use crate::traits::TokenStore;

use super::auth::{AuthAction, AuthState};
use super::messages::{MessagesAction, MessagesState};
use super::posts::{PostsAction, PostsState};
use super::profile::{ProfileAction, ProfileState};

/// An action targeting one of the four slices.
#[derive(Debug, Clone)]
pub enum Action {
    Auth(AuthAction),
    Posts(PostsAction),
    Profile(ProfileAction),
    Messages(MessagesAction),
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Action::Auth(action)
    }
}

impl From<PostsAction> for Action {
    fn from(action: PostsAction) -> Self {
        Action::Posts(action)
    }
}

impl From<ProfileAction> for Action {
    fn from(action: ProfileAction) -> Self {
        Action::Profile(action)
    }
}

impl From<MessagesAction> for Action {
    fn from(action: MessagesAction) -> Self {
        Action::Messages(action)
    }
}

/// The application store.
///
/// Holds the four slices and the durable token storage. There is no global
/// instance; whoever owns the store passes it down explicitly.
///
/// `dispatch` is the only mutation path. It routes the action to its slice's
/// reducer and performs the token persistence side effects around the auth
/// reducer: `LoginSuccess` saves the token, `Logout` erases it. Persistence
/// failures are logged and swallowed — no failure is fatal to the session.
pub struct Store {
    pub auth: AuthState,
    pub posts: PostsState,
    pub profile: ProfileState,
    pub messages: MessagesState,
    token_store: Box<dyn TokenStore>,
}

impl Store {
    /// Create a store, reading the persisted token once.
    ///
    /// A token that cannot be read is treated as absent.
    pub fn new(token_store: Box<dyn TokenStore>) -> Self {
        let token = match token_store.load() {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load persisted token");
                None
            }
        };

        Self {
            auth: AuthState::from_token(token),
            posts: PostsState::default(),
            profile: ProfileState::default(),
            messages: MessagesState::default(),
            token_store,
        }
    }

    /// Apply one action.
    pub fn dispatch(&mut self, action: impl Into<Action>) {
        match action.into() {
            Action::Auth(action) => {
                match &action {
                    AuthAction::LoginSuccess { token, .. } => {
                        if let Err(err) = self.token_store.save(token) {
                            tracing::warn!(error = %err, "failed to persist token");
                        }
                    }
                    AuthAction::Logout => {
                        if let Err(err) = self.token_store.clear() {
                            tracing::warn!(error = %err, "failed to erase persisted token");
                        }
                    }
                    _ => {}
                }
                self.auth.apply(action);
            }
            Action::Posts(action) => self.posts.apply(action),
            Action::Profile(action) => self.profile.apply(action),
            Action::Messages(action) => self.messages.apply(action),
        }
    }
}
