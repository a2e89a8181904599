//! Other-user profile and follow endpoints.

use super::client::{ApiClient, ApiError};
use crate::models::{Post, ProfileUser};

/// GET /profile/{username}
pub async fn get_profile(api: &ApiClient, username: &str) -> Result<ProfileUser, ApiError> {
    api.get_json(&format!("/profile/{}", urlencoding::encode(username)))
        .await
}

/// GET /profile/{username}/posts
pub async fn get_user_posts(api: &ApiClient, username: &str) -> Result<Vec<Post>, ApiError> {
    api.get_json(&format!("/profile/{}/posts", urlencoding::encode(username)))
        .await
}

/// POST /profile/{userId}/follow
pub async fn follow_user(api: &ApiClient, user_id: &str) -> Result<(), ApiError> {
    api.post_empty(&format!("/profile/{}/follow", urlencoding::encode(user_id)))
        .await
}

/// DELETE /profile/{userId}/follow
pub async fn unfollow_user(api: &ApiClient, user_id: &str) -> Result<(), ApiError> {
    api.delete(&format!("/profile/{}/follow", urlencoding::encode(user_id)))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::Response;
    use bytes::Bytes;
    use std::sync::Arc;

    fn api_with_mock() -> (ApiClient, MockHttpClient) {
        let mock = MockHttpClient::new();
        let api = ApiClient::with_base_url(Arc::new(mock.clone()), "https://api.test");
        (api, mock)
    }

    #[tokio::test]
    async fn test_follow_then_unfollow_use_same_path() {
        let (api, mock) = api_with_mock();
        mock.set_response(
            "https://api.test/profile/u2/follow",
            MockResponse::Success(Response::new(204, Bytes::new())),
        );

        follow_user(&api, "u2").await.unwrap();
        unfollow_user(&api, "u2").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[1].method, "DELETE");
        assert_eq!(requests[0].url, requests[1].url);
    }

    #[tokio::test]
    async fn test_username_is_path_encoded() {
        let (api, mock) = api_with_mock();
        mock.set_json_response(
            "https://api.test/profile/john%20doe",
            &serde_json::json!({
                "id": "u1",
                "username": "john doe",
                "followersCount": 0,
                "followingCount": 0,
                "postsCount": 0
            }),
        );

        let profile = get_profile(&api, "john doe").await.unwrap();
        assert_eq!(profile.username, "john doe");
        assert!(profile.is_following.is_none());
    }
}
