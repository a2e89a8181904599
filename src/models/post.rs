//! Posts and comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserSummary;

/// Maximum length of post content, in characters.
pub const MAX_CONTENT_LEN: usize = 500;

/// A short text post.
///
/// `is_liked` is viewer-relative. Two independent copies of a post may exist
/// at once (global feed and profile feed); mutations in one copy do not
/// propagate to the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: UserSummary,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub likes_count: u32,
    pub comments_count: u32,
    pub is_liked: bool,
}

/// A comment on a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: UserSummary,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Typed patch for shallow-merging fields into a [`Post`].
///
/// The author, id, and creation time are immutable after creation and have
/// no patch fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostPatch {
    pub content: Option<String>,
    pub likes_count: Option<u32>,
    pub comments_count: Option<u32>,
    pub is_liked: Option<bool>,
}

impl PostPatch {
    /// Apply the patch, overwriting only the fields that are present.
    pub fn apply_to(&self, post: &mut Post) {
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
        if let Some(count) = self.likes_count {
            post.likes_count = count;
        }
        if let Some(count) = self.comments_count {
            post.comments_count = count;
        }
        if let Some(is_liked) = self.is_liked {
            post.is_liked = is_liked;
        }
    }

    /// The optimistic like-toggle patch for `post`: flips `is_liked` and
    /// moves `likes_count` by one in the matching direction.
    pub fn like_toggle(post: &Post) -> Self {
        let now_liked = !post.is_liked;
        Self {
            is_liked: Some(now_liked),
            likes_count: Some(if now_liked {
                post.likes_count + 1
            } else {
                post.likes_count.saturating_sub(1)
            }),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post() -> Post {
        Post {
            id: "p1".to_string(),
            author: UserSummary {
                id: "u1".to_string(),
                username: "johndoe".to_string(),
                avatar: None,
            },
            content: "hello world".to_string(),
            created_at: "2026-08-01T12:00:00Z".parse().unwrap(),
            likes_count: 4,
            comments_count: 2,
            is_liked: false,
        }
    }

    #[test]
    fn test_patch_merges_in_place() {
        let mut post = sample_post();
        let patch = PostPatch {
            content: Some("edited".to_string()),
            ..Default::default()
        };
        patch.apply_to(&mut post);
        assert_eq!(post.content, "edited");
        assert_eq!(post.likes_count, 4);
        assert!(!post.is_liked);
    }

    #[test]
    fn test_like_toggle_like() {
        let post = sample_post();
        let patch = PostPatch::like_toggle(&post);
        assert_eq!(patch.is_liked, Some(true));
        assert_eq!(patch.likes_count, Some(5));
    }

    #[test]
    fn test_like_toggle_unlike() {
        let mut post = sample_post();
        post.is_liked = true;
        let patch = PostPatch::like_toggle(&post);
        assert_eq!(patch.is_liked, Some(false));
        assert_eq!(patch.likes_count, Some(3));
    }

    #[test]
    fn test_like_toggle_does_not_underflow() {
        let mut post = sample_post();
        post.is_liked = true;
        post.likes_count = 0;
        let patch = PostPatch::like_toggle(&post);
        assert_eq!(patch.likes_count, Some(0));
    }

    #[test]
    fn test_post_wire_format() {
        let json = r#"{
            "id": "p9",
            "author": {"id": "u2", "username": "sarahsmith"},
            "content": "hi",
            "createdAt": "2026-08-01T12:00:00Z",
            "likesCount": 1,
            "commentsCount": 0,
            "isLiked": true
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "p9");
        assert_eq!(post.author.username, "sarahsmith");
        assert!(post.is_liked);
        assert!(post.author.avatar.is_none());
    }
}
