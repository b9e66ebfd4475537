//! Extracted records
//!
//! [`Blog`] and [`Post`] are assembled once, bottom-up, and never mutated
//! afterwards. Each has an `empty()` sentinel standing for "could not be
//! built", and posts without a resolvable publish date carry [`null_date`].

mod blog;
mod post;

pub use blog::Blog;
pub use post::{null_date, Post};
