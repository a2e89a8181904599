//! The client facade: API calls wired to store dispatches.
//!
//! [`AppClient`] implements the flows the UI triggers, each following the
//! same discipline: validate, await the network call, then dispatch the
//! result into the store. All mutations happen after the call completes, so
//! a failed request leaves state untouched.
//!
//! There is no request cancellation or sequencing. A flow started before a
//! newer one (say, two rapid conversation switches) may finish after it and
//! overwrite newer state with stale data.

use std::sync::Arc;

use crate::api::{self, ApiClient, ApiError};
use crate::api::auth::{LoginRequest, ProfileUpdate, RegisterRequest};
use crate::api::images::GeneratedImage;
use crate::models::{Comment, PostPatch, UserPatch};
use crate::state::{
    AuthAction, MessagesAction, PostsAction, ProfileAction, Store,
};
use crate::traits::{HttpClient, TokenStore};

/// Feed page size requested from the server.
pub const PAGE_SIZE: usize = 10;

/// The application client: the store plus the API client that feeds it.
pub struct AppClient {
    api: ApiClient,
    pub store: Store,
}

impl AppClient {
    /// Create a client against the default API base URL.
    ///
    /// Reads the persisted token and, when present, attaches it to the API
    /// client so the session survives restarts (unhydrated until
    /// [`Self::hydrate_session`] runs).
    pub fn new(http: Arc<dyn HttpClient>, token_store: Box<dyn TokenStore>) -> Self {
        Self::with_base_url(http, token_store, api::DEFAULT_BASE_URL)
    }

    /// Create a client against a custom API base URL.
    pub fn with_base_url(
        http: Arc<dyn HttpClient>,
        token_store: Box<dyn TokenStore>,
        base_url: impl Into<String>,
    ) -> Self {
        let store = Store::new(token_store);
        let mut api = ApiClient::with_base_url(http, base_url);
        api.set_auth_token(store.auth.token.clone());
        Self { api, store }
    }

    /// The underlying API client.
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // ----- session -----

    /// Log in and hydrate the session.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<(), ApiError> {
        self.store.dispatch(AuthAction::SetLoading(true));

        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        match api::auth::login(&self.api, &request).await {
            Ok(session) => {
                self.api.set_auth_token(Some(session.token.clone()));
                self.store.dispatch(AuthAction::LoginSuccess {
                    user: session.user,
                    token: session.token,
                });
                Ok(())
            }
            Err(err) => {
                self.store.dispatch(AuthAction::SetLoading(false));
                self.store.dispatch(AuthAction::SetError(Some(err.to_string())));
                Err(err)
            }
        }
    }

    /// Register a new account and hydrate the session.
    pub async fn register(
        &mut self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<(), ApiError> {
        self.store.dispatch(AuthAction::SetLoading(true));

        let request = RegisterRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        match api::auth::register(&self.api, &request).await {
            Ok(session) => {
                self.api.set_auth_token(Some(session.token.clone()));
                self.store.dispatch(AuthAction::LoginSuccess {
                    user: session.user,
                    token: session.token,
                });
                Ok(())
            }
            Err(err) => {
                self.store.dispatch(AuthAction::SetLoading(false));
                self.store.dispatch(AuthAction::SetError(Some(err.to_string())));
                Err(err)
            }
        }
    }

    /// Resolve the viewer behind a persisted token.
    ///
    /// No-op when there is no token or the session is already hydrated.
    pub async fn hydrate_session(&mut self) -> Result<(), ApiError> {
        let Some(token) = self.store.auth.token.clone() else {
            return Ok(());
        };
        if self.store.auth.user.is_some() {
            return Ok(());
        }

        let user = api::auth::get_profile(&self.api).await?;
        self.store.dispatch(AuthAction::LoginSuccess { user, token });
        Ok(())
    }

    /// End the session locally. No server-side invalidation is performed.
    pub fn logout(&mut self) {
        self.store.dispatch(AuthAction::Logout);
        self.api.set_auth_token(None);
    }

    /// Update the viewer's profile and merge the server's result.
    pub async fn update_profile(&mut self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let user = api::auth::update_profile(&self.api, update).await?;
        self.store
            .dispatch(AuthAction::UpdateProfile(UserPatch::from_user(&user)));
        Ok(())
    }

    // ----- feed -----

    /// Load the first feed page, replacing whatever is shown.
    pub async fn load_feed(&mut self) -> Result<(), ApiError> {
        self.store.dispatch(PostsAction::SetLoading(true));

        let result = api::posts::get_posts(&self.api, 1).await;
        self.store.dispatch(PostsAction::SetLoading(false));

        let posts = result?;
        let full_page = posts.len() >= PAGE_SIZE;
        self.store.dispatch(PostsAction::SetPosts(posts));
        self.store.dispatch(PostsAction::SetHasMore(full_page));
        Ok(())
    }

    /// Load the next feed page. No-op when exhausted or already loading.
    pub async fn load_more_posts(&mut self) -> Result<(), ApiError> {
        if !self.store.posts.has_more || self.store.posts.is_loading {
            return Ok(());
        }
        self.store.dispatch(PostsAction::SetLoading(true));

        let next_page = self.store.posts.page + 1;
        let result = api::posts::get_posts(&self.api, next_page).await;
        self.store.dispatch(PostsAction::SetLoading(false));

        let posts = result?;
        if posts.len() < PAGE_SIZE {
            self.store.dispatch(PostsAction::SetHasMore(false));
        }
        self.store.dispatch(PostsAction::AddPosts(posts));
        Ok(())
    }

    /// Publish a post and prepend it to the feed.
    pub async fn create_post(&mut self, content: &str) -> Result<(), ApiError> {
        let post = api::posts::create_post(&self.api, content).await?;
        self.store.dispatch(PostsAction::AddPost(post));
        Ok(())
    }

    /// Toggle the viewer's like on a feed post.
    ///
    /// The local counter is optimistic arithmetic; the server's like state is
    /// not reconciled back. Unknown ids are a no-op.
    pub async fn toggle_like(&mut self, post_id: &str) -> Result<(), ApiError> {
        let Some(post) = self.store.posts.post(post_id) else {
            return Ok(());
        };
        let patch = PostPatch::like_toggle(post);

        api::posts::like_post(&self.api, post_id).await?;
        self.store.dispatch(PostsAction::UpdatePost {
            id: post_id.to_string(),
            patch,
        });
        Ok(())
    }

    /// Delete a post from the server and the feed.
    pub async fn delete_post(&mut self, post_id: &str) -> Result<(), ApiError> {
        api::posts::delete_post(&self.api, post_id).await?;
        self.store
            .dispatch(PostsAction::DeletePost(post_id.to_string()));
        Ok(())
    }

    /// Load a post's comments. Comments are not held in the store; they live
    /// with the post card that requested them.
    pub async fn load_comments(&self, post_id: &str) -> Result<Vec<Comment>, ApiError> {
        api::posts::get_comments(&self.api, post_id).await
    }

    /// Add a comment and bump the post's comment counter.
    pub async fn add_comment(&mut self, post_id: &str, content: &str) -> Result<Comment, ApiError> {
        let comment = api::posts::add_comment(&self.api, post_id, content).await?;

        if let Some(post) = self.store.posts.post(post_id) {
            let patch = PostPatch {
                comments_count: Some(post.comments_count + 1),
                ..Default::default()
            };
            self.store.dispatch(PostsAction::UpdatePost {
                id: post_id.to_string(),
                patch,
            });
        }
        Ok(comment)
    }

    // ----- profile -----

    /// Open a user's profile: load the profile and their posts.
    pub async fn open_profile(&mut self, username: &str) -> Result<(), ApiError> {
        self.store.dispatch(ProfileAction::SetLoading(true));

        let profile = match api::profile::get_profile(&self.api, username).await {
            Ok(profile) => profile,
            Err(err) => {
                self.store.dispatch(ProfileAction::SetLoading(false));
                self.store
                    .dispatch(ProfileAction::SetError(Some(err.to_string())));
                return Err(err);
            }
        };
        self.store.dispatch(ProfileAction::SetCurrentProfile(profile));

        let posts = match api::profile::get_user_posts(&self.api, username).await {
            Ok(posts) => posts,
            Err(err) => {
                self.store.dispatch(ProfileAction::SetLoading(false));
                self.store
                    .dispatch(ProfileAction::SetError(Some(err.to_string())));
                return Err(err);
            }
        };
        self.store.dispatch(ProfileAction::SetProfilePosts(posts));
        self.store.dispatch(ProfileAction::SetLoading(false));
        Ok(())
    }

    /// Follow or unfollow the viewed profile, then flip the local state.
    ///
    /// No-op when no profile is open or it is the viewer's own.
    pub async fn toggle_follow(&mut self) -> Result<(), ApiError> {
        let Some(profile) = &self.store.profile.current_profile else {
            return Ok(());
        };
        if profile.is_own_profile() {
            return Ok(());
        }
        let user_id = profile.id.clone();
        let currently_following = profile.is_following.unwrap_or(false);

        if currently_following {
            api::profile::unfollow_user(&self.api, &user_id).await?;
        } else {
            api::profile::follow_user(&self.api, &user_id).await?;
        }
        self.store.dispatch(ProfileAction::ToggleFollow);
        Ok(())
    }

    /// Leave the profile view, dropping its state.
    pub fn leave_profile(&mut self) {
        self.store.dispatch(ProfileAction::ClearProfile);
    }

    // ----- messages -----

    /// Load the conversation list.
    pub async fn load_conversations(&mut self) -> Result<(), ApiError> {
        self.store.dispatch(MessagesAction::SetLoading(true));

        let result = api::messages::get_conversations(&self.api).await;
        self.store.dispatch(MessagesAction::SetLoading(false));

        let conversations = result?;
        self.store
            .dispatch(MessagesAction::SetConversations(conversations));
        Ok(())
    }

    /// Switch to a conversation and load its messages.
    ///
    /// Between the switch and the load completing, the previous
    /// conversation's messages are still in the store.
    pub async fn open_conversation(&mut self, conversation_id: &str) -> Result<(), ApiError> {
        self.store.dispatch(MessagesAction::SetActiveConversation(
            conversation_id.to_string(),
        ));
        self.store.dispatch(MessagesAction::SetLoading(true));

        let result = api::messages::get_messages(&self.api, conversation_id).await;
        self.store.dispatch(MessagesAction::SetLoading(false));

        let messages = result?;
        self.store.dispatch(MessagesAction::SetMessages(messages));
        Ok(())
    }

    /// Send a message in the active conversation and append the stored copy.
    pub async fn send_message(&mut self, content: &str) -> Result<(), ApiError> {
        let Some(conversation_id) = self.store.messages.active_conversation.clone() else {
            return Err(ApiError::Validation(
                "no active conversation".to_string(),
            ));
        };

        let message = api::messages::send_message(&self.api, &conversation_id, content).await?;
        self.store.dispatch(MessagesAction::AddMessage(message));
        Ok(())
    }

    // ----- images -----

    /// Generate an image from a prompt. The result is returned to the
    /// caller; nothing is stored.
    pub async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, ApiError> {
        api::images::generate_image(&self.api, prompt).await
    }
}
