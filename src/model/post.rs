use chrono::{DateTime, FixedOffset, Utc};
use serde::Serialize;

/// The "no publish date known" sentinel
///
/// A fixed instant far outside any real publishing history,
/// `0001-01-01T00:00:00+00:00`, normalized to UTC so that comparisons do
/// not depend on the host timezone.
pub fn null_date() -> DateTime<FixedOffset> {
    const YEAR_ONE: i64 = -62_135_596_800;

    DateTime::<Utc>::from_timestamp(YEAR_ONE, 0)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
        .fixed_offset()
}

/// A single post extracted from an archive page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    /// Identifier attribute of the post container (e.g. `post-001`)
    pub id: String,

    /// Post title, empty if it could not be resolved
    pub title: String,

    /// Reserved, always empty
    pub subtitle: String,

    /// Image URLs in document order
    pub images: Vec<String>,

    /// Publish date, or [`null_date`]
    pub date: DateTime<FixedOffset>,

    /// Serialized markup of the post body
    pub content: String,
}

impl Post {
    /// The sentinel for a fragment that could not be parsed
    pub fn empty() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            subtitle: String::new(),
            images: Vec::new(),
            date: null_date(),
            content: String::new(),
        }
    }

    /// Returns true if this is the empty-post sentinel
    pub fn is_empty(&self) -> bool {
        *self == Self::empty()
    }

    /// First image URL, the single image in thumbnail mode
    pub fn image_url(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Returns true if a publish date was found
    pub fn has_date(&self) -> bool {
        self.date != null_date()
    }
}

impl Default for Post {
    fn default() -> Self {
        Self::empty()
    }
}
