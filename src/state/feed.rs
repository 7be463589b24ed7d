//! Feed Models
//!
//! Post, author, and comment types plus the like reconciliation applied to
//! the local feed after a toggle round-trip.

/// Reduced user object embedded in posts and comments
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "profile")]
    pub profile_pic: Option<String>,
}

impl Author {
    /// First letter of the name, used as the avatar fallback
    pub fn initial(&self) -> String {
        self.name.chars().next().map(|c| c.to_string()).unwrap_or_default()
    }
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub user: Author,
    pub text: String,
    #[serde(default)]
    pub created_at: String,
}

/// A user-authored content item with like/comment aggregates. `liked` is
/// viewer-relative.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Post {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub user: Author,
    #[serde(default)]
    pub caption: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub liked: bool,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub created_at: String,
}

/// Reconcile the server's like verdict into the local feed.
///
/// `liked` and `like_count` move together, exactly ±1 per effective toggle.
/// A verdict that matches the post's current state is a no-op, as is a post
/// id the feed doesn't hold.
pub fn apply_like(posts: &mut [Post], post_id: &str, liked: bool) {
    if let Some(post) = posts.iter_mut().find(|p| p.id == post_id) {
        if post.liked == liked {
            return;
        }
        post.liked = liked;
        if liked {
            post.like_count += 1;
        } else {
            post.like_count = post.like_count.saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: &str, liked: bool, like_count: u32) -> Post {
        Post {
            id: id.to_string(),
            user: Author::default(),
            caption: String::new(),
            image: None,
            mood: None,
            like_count,
            liked,
            comment_count: 0,
            comments: Vec::new(),
            created_at: String::new(),
        }
    }

    #[test]
    fn test_like_then_unlike_moves_count_by_one_each_way() {
        let mut posts = vec![post("a", false, 5)];

        apply_like(&mut posts, "a", true);
        assert!(posts[0].liked);
        assert_eq!(posts[0].like_count, 6);

        apply_like(&mut posts, "a", false);
        assert!(!posts[0].liked);
        assert_eq!(posts[0].like_count, 5);
    }

    #[test]
    fn test_echoed_state_is_a_noop() {
        let mut posts = vec![post("a", true, 6)];

        apply_like(&mut posts, "a", true);
        assert!(posts[0].liked);
        assert_eq!(posts[0].like_count, 6);
    }

    #[test]
    fn test_unknown_post_leaves_feed_untouched() {
        let mut posts = vec![post("a", false, 5)];

        apply_like(&mut posts, "missing", true);
        assert!(!posts[0].liked);
        assert_eq!(posts[0].like_count, 5);
    }

    #[test]
    fn test_only_the_matching_post_changes() {
        let mut posts = vec![post("a", false, 5), post("b", false, 2)];

        apply_like(&mut posts, "b", true);
        assert_eq!(posts[0].like_count, 5);
        assert_eq!(posts[1].like_count, 3);
        assert!(posts[1].liked);
    }

    #[test]
    fn test_unlike_at_zero_saturates() {
        let mut posts = vec![post("a", true, 0)];

        apply_like(&mut posts, "a", false);
        assert_eq!(posts[0].like_count, 0);
        assert!(!posts[0].liked);
    }

    #[test]
    fn test_post_parses_backend_shape() {
        let json = r#"{
            "_id": "66f0",
            "user": {"name": "Ana", "profile": "ana.png"},
            "caption": "hello",
            "like_count": 3,
            "liked": true,
            "comment_count": 1,
            "comments": [{"user": {"name": "Bo", "profile_pic": "bo.png"}, "text": "hi", "created_at": "2025-05-01T10:00:00"}],
            "created_at": "2025-05-01T09:00:00"
        }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, "66f0");
        assert_eq!(post.user.profile_pic.as_deref(), Some("ana.png"));
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].user.profile_pic.as_deref(), Some("bo.png"));
    }
}
