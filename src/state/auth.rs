//! Session slice: the viewer and their token.

use crate::models::{User, UserPatch};

/// Session state.
///
/// Invariant: `user` is only ever non-`None` while `token` is non-`None`.
/// The reverse is allowed — a freshly started process holds the persisted
/// token with no user until the session is hydrated.
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Mutations of the session slice.
///
/// The token persistence side effects of `LoginSuccess` and `Logout` are
/// performed by [`crate::state::Store`]; the reducer itself only touches
/// in-memory state.
#[derive(Debug, Clone)]
pub enum AuthAction {
    SetLoading(bool),
    SetError(Option<String>),
    LoginSuccess { user: User, token: String },
    Logout,
    UpdateProfile(UserPatch),
}

impl AuthState {
    /// State at process start: the token as read once from durable storage,
    /// no user until hydration.
    pub fn from_token(token: Option<String>) -> Self {
        Self {
            token,
            ..Default::default()
        }
    }

    /// Whether a session token is present (hydrated or not).
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Apply one action to the slice.
    pub fn apply(&mut self, action: AuthAction) {
        match action {
            AuthAction::SetLoading(is_loading) => self.is_loading = is_loading,
            AuthAction::SetError(error) => self.error = error,
            AuthAction::LoginSuccess { user, token } => {
                self.user = Some(user);
                self.token = Some(token);
                self.is_loading = false;
                self.error = None;
            }
            AuthAction::Logout => {
                self.user = None;
                self.token = None;
                self.error = None;
            }
            AuthAction::UpdateProfile(patch) => {
                // No-op while logged out
                if let Some(user) = &mut self.user {
                    patch.apply_to(user);
                }
            }
        }
    }
}
