//! User-shaped entities: the viewer, embedded author/participant summaries,
//! and the profile-page view of another user.

use serde::{Deserialize, Serialize};

/// Maximum length of a user bio, in characters.
pub const MAX_BIO_LEN: usize = 500;

/// Fallback avatar for users without an uploaded one: a deterministic
/// generated image keyed by username.
fn generated_avatar(username: &str) -> String {
    format!(
        "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
        urlencoding::encode(username)
    )
}

/// Minimal user identity embedded in posts, comments, and conversations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl UserSummary {
    /// The avatar URI to display, falling back to a generated one.
    pub fn avatar_url(&self) -> String {
        self.avatar
            .clone()
            .unwrap_or_else(|| generated_avatar(&self.username))
    }
}

/// The authenticated viewer's full profile.
///
/// The three counters are display values delivered by the server; they are
/// never recomputed from related entities client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub followers_count: u32,
    pub following_count: u32,
    pub posts_count: u32,
}

impl User {
    /// The avatar URI to display, falling back to a generated one.
    pub fn avatar_url(&self) -> String {
        self.avatar
            .clone()
            .unwrap_or_else(|| generated_avatar(&self.username))
    }

    /// The embeddable summary of this user.
    pub fn summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            username: self.username.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// Another user's profile as seen by the viewer.
///
/// `is_following` is `None` when the viewer is looking at their own profile,
/// where the concept does not apply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUser {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub followers_count: u32,
    pub following_count: u32,
    pub posts_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_following: Option<bool>,
}

impl ProfileUser {
    /// The avatar URI to display, falling back to a generated one.
    pub fn avatar_url(&self) -> String {
        self.avatar
            .clone()
            .unwrap_or_else(|| generated_avatar(&self.username))
    }

    /// Whether this profile belongs to the viewer.
    pub fn is_own_profile(&self) -> bool {
        self.is_following.is_none()
    }
}

/// Typed patch for shallow-merging fields into a [`User`].
///
/// Replaces the dynamic `{...user, ...partial}` merge of the original
/// service: only the fields enumerated here are mutable after creation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    pub followers_count: Option<u32>,
    pub following_count: Option<u32>,
    pub posts_count: Option<u32>,
}

impl UserPatch {
    /// Apply the patch, overwriting only the fields that are present.
    pub fn apply_to(&self, user: &mut User) {
        if let Some(username) = &self.username {
            user.username = username.clone();
        }
        if let Some(email) = &self.email {
            user.email = email.clone();
        }
        if let Some(avatar) = &self.avatar {
            user.avatar = Some(avatar.clone());
        }
        if let Some(bio) = &self.bio {
            user.bio = Some(bio.clone());
        }
        if let Some(count) = self.followers_count {
            user.followers_count = count;
        }
        if let Some(count) = self.following_count {
            user.following_count = count;
        }
        if let Some(count) = self.posts_count {
            user.posts_count = count;
        }
    }

    /// A patch carrying every field of `user`, for merging a full server
    /// response into the local copy.
    pub fn from_user(user: &User) -> Self {
        Self {
            username: Some(user.username.clone()),
            email: Some(user.email.clone()),
            avatar: user.avatar.clone(),
            bio: user.bio.clone(),
            followers_count: Some(user.followers_count),
            following_count: Some(user.following_count),
            posts_count: Some(user.posts_count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            username: "johndoe".to_string(),
            email: "john@example.com".to_string(),
            avatar: None,
            bio: None,
            followers_count: 10,
            following_count: 5,
            posts_count: 3,
        }
    }

    #[test]
    fn test_avatar_falls_back_to_generated() {
        let user = sample_user();
        assert_eq!(
            user.avatar_url(),
            "https://api.dicebear.com/7.x/avataaars/svg?seed=johndoe"
        );
    }

    #[test]
    fn test_avatar_seed_is_encoded() {
        let summary = UserSummary {
            id: "u1".to_string(),
            username: "john doe".to_string(),
            avatar: None,
        };
        assert!(summary.avatar_url().ends_with("seed=john%20doe"));
    }

    #[test]
    fn test_explicit_avatar_wins() {
        let mut user = sample_user();
        user.avatar = Some("https://cdn.example.com/a.png".to_string());
        assert_eq!(user.avatar_url(), "https://cdn.example.com/a.png");
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut user = sample_user();
        let patch = UserPatch {
            bio: Some("hello".to_string()),
            followers_count: Some(11),
            ..Default::default()
        };
        patch.apply_to(&mut user);
        assert_eq!(user.bio.as_deref(), Some("hello"));
        assert_eq!(user.followers_count, 11);
        // untouched fields keep their values
        assert_eq!(user.username, "johndoe");
        assert_eq!(user.posts_count, 3);
    }

    #[test]
    fn test_patch_from_user_round_trips() {
        let source = sample_user();
        let mut target = sample_user();
        target.username = "other".to_string();
        target.followers_count = 0;
        UserPatch::from_user(&source).apply_to(&mut target);
        assert_eq!(target, source);
    }

    #[test]
    fn test_profile_user_own_profile() {
        let profile = ProfileUser {
            id: "u1".to_string(),
            username: "johndoe".to_string(),
            email: None,
            avatar: None,
            bio: None,
            followers_count: 0,
            following_count: 0,
            posts_count: 0,
            is_following: None,
        };
        assert!(profile.is_own_profile());
    }

    #[test]
    fn test_user_wire_format_is_camel_case() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["followersCount"], 10);
        assert_eq!(json["followingCount"], 5);
        assert_eq!(json["postsCount"], 3);
    }

    #[test]
    fn test_summary_of_user() {
        let mut user = sample_user();
        user.avatar = Some("a.png".to_string());
        let summary = user.summary();
        assert_eq!(summary.id, "u1");
        assert_eq!(summary.username, "johndoe");
        assert_eq!(summary.avatar.as_deref(), Some("a.png"));
    }
}
