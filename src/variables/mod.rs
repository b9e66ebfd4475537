//! Named values computed from posts
//!
//! A [`VariableExtractor`] pairs a name with a pure function of a [`Post`].
//! Applying it yields a [`Variable`]. The built-in `word_count` extractor
//! counts single-space separated runs in the post content.

use crate::model::Post;
use serde::Serialize;
use std::fmt;

/// A named value computed from a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable<T> {
    pub name: String,
    pub value: T,
}

/// Computes a named value from posts
pub struct VariableExtractor<T> {
    name: String,
    extract: Box<dyn Fn(&Post) -> T + Send + Sync>,
}

impl<T> VariableExtractor<T> {
    /// Creates an extractor called `name` computing `extract`
    pub fn new(name: impl Into<String>, extract: impl Fn(&Post) -> T + Send + Sync + 'static) -> Self {
        Self {
            name: name.into(),
            extract: Box::new(extract),
        }
    }

    /// The variable name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Applies the extractor to `post`
    pub fn extract(&self, post: &Post) -> Variable<T> {
        Variable {
            name: self.name.clone(),
            value: (self.extract)(post),
        }
    }
}

impl<T> fmt::Debug for VariableExtractor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VariableExtractor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Counts words in the post content by splitting on single spaces
///
/// This is deliberately naive: `"a  b"` counts three words, and punctuation
/// stays attached to its neighbour. Empty content has zero words.
pub fn count_words_in(post: &Post) -> usize {
    if post.content.is_empty() {
        0
    } else {
        post.content.split(' ').count()
    }
}

/// The `word_count` extractor
pub fn word_count_extractor() -> VariableExtractor<usize> {
    VariableExtractor::new("word_count", count_words_in)
}
