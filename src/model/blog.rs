use crate::model::Post;
use serde::Serialize;

/// A blog with its resolved title and every discovered post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Blog {
    /// Blog title, empty if none of the known title markers matched
    pub title: String,

    /// Reserved, always empty
    pub subtitle: String,

    /// The URL the blog was built from
    pub url: String,

    /// Posts in page order, then document order. Not deduplicated.
    pub posts: Vec<Post>,
}

impl Blog {
    /// The sentinel for "no blog could be built"
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if this is the empty-blog sentinel
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// Posts that were parsed successfully
    pub fn parsed_posts(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter().filter(|post| !post.is_empty())
    }
}
