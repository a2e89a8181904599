//! Profile-view slice.

use crate::models::{Post, ProfileUser};

/// State of the currently viewed profile.
///
/// `profile_posts` is an independent copy of the viewed user's posts; a post
/// that also appears in the global feed is duplicated, and edits or deletes
/// in one copy are not reflected in the other.
#[derive(Debug, Clone, Default)]
pub struct ProfileState {
    pub current_profile: Option<ProfileUser>,
    pub profile_posts: Vec<Post>,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Mutations of the profile slice.
#[derive(Debug, Clone)]
pub enum ProfileAction {
    SetLoading(bool),
    SetError(Option<String>),
    SetCurrentProfile(ProfileUser),
    SetProfilePosts(Vec<Post>),
    /// Optimistic flip of the follow state, adjusting the follower counter.
    ///
    /// Dispatch this only after the matching follow/unfollow call succeeded;
    /// the counter is local arithmetic, not a server value.
    ToggleFollow,
    /// Drop the viewed profile. Must run on navigation away to avoid showing
    /// stale data on the next profile.
    ClearProfile,
}

impl ProfileState {
    /// Apply one action to the slice.
    pub fn apply(&mut self, action: ProfileAction) {
        match action {
            ProfileAction::SetLoading(is_loading) => self.is_loading = is_loading,
            ProfileAction::SetError(error) => self.error = error,
            ProfileAction::SetCurrentProfile(profile) => self.current_profile = Some(profile),
            ProfileAction::SetProfilePosts(posts) => self.profile_posts = posts,
            ProfileAction::ToggleFollow => {
                if let Some(profile) = &mut self.current_profile {
                    let now_following = !profile.is_following.unwrap_or(false);
                    profile.is_following = Some(now_following);
                    profile.followers_count = if now_following {
                        profile.followers_count + 1
                    } else {
                        profile.followers_count.saturating_sub(1)
                    };
                }
            }
            ProfileAction::ClearProfile => {
                self.current_profile = None;
                self.profile_posts = Vec::new();
                self.error = None;
            }
        }
    }
}
