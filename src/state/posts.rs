//! Global feed slice.

use crate::models::{Post, PostPatch};

/// Feed state.
///
/// The sequence order is caller-determined (newest-first by convention);
/// the slice never re-sorts.
#[derive(Debug, Clone)]
pub struct PostsState {
    pub posts: Vec<Post>,
    pub is_loading: bool,
    pub has_more: bool,
    pub page: u32,
}

impl Default for PostsState {
    fn default() -> Self {
        Self {
            posts: Vec::new(),
            is_loading: false,
            has_more: true,
            page: 1,
        }
    }
}

/// Mutations of the feed slice.
#[derive(Debug, Clone)]
pub enum PostsAction {
    SetLoading(bool),
    /// Replace the whole feed (initial load) and reset the page counter.
    SetPosts(Vec<Post>),
    /// Append a pagination batch and advance the page counter.
    AddPosts(Vec<Post>),
    /// Prepend a single post (the viewer just published it).
    AddPost(Post),
    /// Shallow-merge a patch into the post with this id, if present.
    UpdatePost { id: String, patch: PostPatch },
    /// Remove the post with this id, if present.
    DeletePost(String),
    SetHasMore(bool),
}

impl PostsState {
    /// Apply one action to the slice.
    ///
    /// `UpdatePost` and `DeletePost` on an id that is not in the sequence are
    /// silent no-ops: an in-flight response may race a deletion, and neither
    /// side should fail for it.
    pub fn apply(&mut self, action: PostsAction) {
        match action {
            PostsAction::SetLoading(is_loading) => self.is_loading = is_loading,
            PostsAction::SetPosts(posts) => {
                self.posts = posts;
                self.page = 1;
            }
            PostsAction::AddPosts(posts) => {
                self.posts.extend(posts);
                self.page += 1;
            }
            PostsAction::AddPost(post) => self.posts.insert(0, post),
            PostsAction::UpdatePost { id, patch } => {
                if let Some(post) = self.posts.iter_mut().find(|post| post.id == id) {
                    patch.apply_to(post);
                }
            }
            PostsAction::DeletePost(id) => self.posts.retain(|post| post.id != id),
            PostsAction::SetHasMore(has_more) => self.has_more = has_more,
        }
    }

    /// The post with the given id, if present.
    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserSummary;

    fn post(id: &str) -> Post {
        Post {
            id: id.to_string(),
            author: UserSummary {
                id: "u1".to_string(),
                username: "johndoe".to_string(),
                avatar: None,
            },
            content: format!("post {}", id),
            created_at: "2026-08-01T12:00:00Z".parse().unwrap(),
            likes_count: 0,
            comments_count: 0,
            is_liked: false,
        }
    }

    #[test]
    fn test_set_posts_replaces_and_resets_page() {
        let mut state = PostsState::default();
        state.apply(PostsAction::AddPosts(vec![post("a")]));
        assert_eq!(state.page, 2);

        state.apply(PostsAction::SetPosts(vec![post("b"), post("c")]));
        assert_eq!(state.page, 1);
        assert_eq!(state.posts.len(), 2);
        assert_eq!(state.posts[0].id, "b");
    }

    #[test]
    fn test_add_posts_appends_and_advances_page() {
        let mut state = PostsState::default();
        state.apply(PostsAction::SetPosts(vec![post("a")]));

        state.apply(PostsAction::AddPosts(vec![post("b"), post("c")]));
        state.apply(PostsAction::AddPosts(vec![post("d")]));

        assert_eq!(state.page, 3);
        let ids: Vec<&str> = state.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_add_post_prepends() {
        let mut state = PostsState::default();
        state.apply(PostsAction::SetPosts(vec![]));
        state.apply(PostsAction::AddPost(post("x")));
        state.apply(PostsAction::AddPost(post("y")));

        let ids: Vec<&str> = state.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["y", "x"]);
    }

    #[test]
    fn test_update_post_merges_in_place() {
        let mut state = PostsState::default();
        state.apply(PostsAction::SetPosts(vec![post("a"), post("b")]));

        state.apply(PostsAction::UpdatePost {
            id: "b".to_string(),
            patch: PostPatch {
                is_liked: Some(true),
                likes_count: Some(1),
                ..Default::default()
            },
        });

        assert!(!state.post("a").unwrap().is_liked);
        assert!(state.post("b").unwrap().is_liked);
        assert_eq!(state.post("b").unwrap().likes_count, 1);
    }

    #[test]
    fn test_update_post_is_idempotent_for_fixed_patch() {
        let mut state = PostsState::default();
        state.apply(PostsAction::SetPosts(vec![post("a")]));

        let patch = PostPatch {
            content: Some("edited".to_string()),
            likes_count: Some(7),
            ..Default::default()
        };
        state.apply(PostsAction::UpdatePost {
            id: "a".to_string(),
            patch: patch.clone(),
        });
        let once = state.posts.clone();

        state.apply(PostsAction::UpdatePost {
            id: "a".to_string(),
            patch,
        });
        assert_eq!(state.posts, once);
    }

    #[test]
    fn test_update_missing_post_is_a_noop() {
        let mut state = PostsState::default();
        state.apply(PostsAction::SetPosts(vec![post("a")]));
        let before = state.posts.clone();

        state.apply(PostsAction::UpdatePost {
            id: "missing".to_string(),
            patch: PostPatch {
                is_liked: Some(true),
                ..Default::default()
            },
        });
        assert_eq!(state.posts, before);
    }

    #[test]
    fn test_delete_post_twice_is_a_noop() {
        let mut state = PostsState::default();
        state.apply(PostsAction::SetPosts(vec![post("a"), post("b")]));

        state.apply(PostsAction::DeletePost("a".to_string()));
        assert_eq!(state.posts.len(), 1);

        state.apply(PostsAction::DeletePost("a".to_string()));
        assert_eq!(state.posts.len(), 1);
        assert_eq!(state.posts[0].id, "b");
    }

    #[test]
    fn test_flags() {
        let mut state = PostsState::default();
        assert!(state.has_more);

        state.apply(PostsAction::SetHasMore(false));
        state.apply(PostsAction::SetLoading(true));
        assert!(!state.has_more);
        assert!(state.is_loading);
    }
}
