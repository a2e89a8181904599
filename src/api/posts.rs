//! Feed, post, like, and comment endpoints.

use serde::Deserialize;

use super::client::{ApiClient, ApiError};
use crate::models::{Comment, Post, MAX_CONTENT_LEN};

/// Like state returned by the like endpoint.
///
/// The local like-toggle is optimistic and currently ignores this value;
/// it is decoded anyway so callers that want to reconcile can.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeState {
    pub likes_count: u32,
    pub is_liked: bool,
}

fn validate_content(content: &str) -> Result<(), ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::Validation("content must not be empty".to_string()));
    }
    if content.chars().count() > MAX_CONTENT_LEN {
        return Err(ApiError::Validation(format!(
            "content exceeds {} characters",
            MAX_CONTENT_LEN
        )));
    }
    Ok(())
}

/// GET /posts?page=N — one page of the global feed.
pub async fn get_posts(api: &ApiClient, page: u32) -> Result<Vec<Post>, ApiError> {
    api.get_json(&format!("/posts?page={}", page)).await
}

/// POST /posts — publish a post.
pub async fn create_post(api: &ApiClient, content: &str) -> Result<Post, ApiError> {
    validate_content(content)?;
    api.post_json("/posts", &serde_json::json!({ "content": content }))
        .await
}

/// POST /posts/{id}/like — toggle the viewer's like on a post.
pub async fn like_post(api: &ApiClient, post_id: &str) -> Result<LikeState, ApiError> {
    api.post_json(
        &format!("/posts/{}/like", urlencoding::encode(post_id)),
        &serde_json::json!({}),
    )
    .await
}

/// DELETE /posts/{id}
pub async fn delete_post(api: &ApiClient, post_id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/posts/{}", urlencoding::encode(post_id)))
        .await
}

/// GET /posts/{id}/comments
pub async fn get_comments(api: &ApiClient, post_id: &str) -> Result<Vec<Comment>, ApiError> {
    api.get_json(&format!("/posts/{}/comments", urlencoding::encode(post_id)))
        .await
}

/// POST /posts/{id}/comments
pub async fn add_comment(api: &ApiClient, post_id: &str, content: &str) -> Result<Comment, ApiError> {
    if content.trim().is_empty() {
        return Err(ApiError::Validation("comment must not be empty".to_string()));
    }
    api.post_json(
        &format!("/posts/{}/comments", urlencoding::encode(post_id)),
        &serde_json::json!({ "content": content }),
    )
    .await
}
