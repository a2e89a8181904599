//! Common fixtures for integration tests.
#![allow(dead_code)]

use connectsphere::models::{Conversation, Message, Post, ProfileUser, User, UserSummary};

/// Initialize test logging. Safe to call from every test; only the first
/// call installs the subscriber.
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// The viewer used across tests.
pub fn viewer() -> User {
    User {
        id: "u1".to_string(),
        username: "johndoe".to_string(),
        email: "john@example.com".to_string(),
        avatar: None,
        bio: Some("hello".to_string()),
        followers_count: 10,
        following_count: 5,
        posts_count: 3,
    }
}

pub fn author(id: &str, username: &str) -> UserSummary {
    UserSummary {
        id: id.to_string(),
        username: username.to_string(),
        avatar: None,
    }
}

pub fn post(id: &str, content: &str) -> Post {
    Post {
        id: id.to_string(),
        author: author("u2", "sarahsmith"),
        content: content.to_string(),
        created_at: "2026-08-01T12:00:00Z".parse().unwrap(),
        likes_count: 0,
        comments_count: 0,
        is_liked: false,
    }
}

pub fn posts(ids: &[&str]) -> Vec<Post> {
    ids.iter().map(|id| post(id, "content")).collect()
}

pub fn profile(username: &str, followers: u32, is_following: Option<bool>) -> ProfileUser {
    ProfileUser {
        id: "u2".to_string(),
        username: username.to_string(),
        email: None,
        avatar: None,
        bio: None,
        followers_count: followers,
        following_count: 3,
        posts_count: 9,
        is_following,
    }
}

pub fn message(id: &str, sender_id: &str, content: &str) -> Message {
    Message {
        id: id.to_string(),
        sender_id: sender_id.to_string(),
        content: content.to_string(),
        timestamp: "2026-08-01T09:00:00Z".parse().unwrap(),
    }
}

pub fn conversation(id: &str, participant_name: &str, unread: u32) -> Conversation {
    Conversation {
        id: id.to_string(),
        participant: author("u2", participant_name),
        last_message: None,
        unread_count: unread,
    }
}

/// JSON body of a post, as the server would send it.
pub fn post_json(id: &str, content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "author": {"id": "u2", "username": "sarahsmith"},
        "content": content,
        "createdAt": "2026-08-01T12:00:00Z",
        "likesCount": 0,
        "commentsCount": 0,
        "isLiked": false
    })
}

/// JSON body of the viewer, as the server would send it.
pub fn viewer_json() -> serde_json::Value {
    serde_json::json!({
        "id": "u1",
        "username": "johndoe",
        "email": "john@example.com",
        "bio": "hello",
        "followersCount": 10,
        "followingCount": 5,
        "postsCount": 3
    })
}
