//! Authentication and own-profile endpoints.

use serde::{Deserialize, Serialize};

use super::client::{ApiClient, ApiError};
use crate::models::{User, MAX_BIO_LEN};

/// Request body for POST /auth/register.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for POST /auth/login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Session payload returned by register and login.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub user: User,
    pub token: String,
}

/// Fields of the viewer's profile that can be edited.
///
/// The avatar file upload is handled outside this crate; only the text
/// fields travel here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// POST /auth/register
pub async fn register(api: &ApiClient, request: &RegisterRequest) -> Result<SessionResponse, ApiError> {
    api.post_json("/auth/register", request).await
}

/// POST /auth/login
pub async fn login(api: &ApiClient, request: &LoginRequest) -> Result<SessionResponse, ApiError> {
    api.post_json("/auth/login", request).await
}

/// GET /auth/profile — the authenticated viewer's own profile.
pub async fn get_profile(api: &ApiClient) -> Result<User, ApiError> {
    api.get_json("/auth/profile").await
}

/// PUT /auth/profile — update the viewer's profile.
pub async fn update_profile(api: &ApiClient, update: &ProfileUpdate) -> Result<User, ApiError> {
    if let Some(bio) = &update.bio {
        if bio.chars().count() > MAX_BIO_LEN {
            return Err(ApiError::Validation(format!(
                "bio exceeds {} characters",
                MAX_BIO_LEN
            )));
        }
    }
    api.put_json("/auth/profile", update).await
}
