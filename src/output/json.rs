use crate::model::Blog;
use crate::output::OutputResult;

/// Serializes blogs as pretty-printed JSON
///
/// Dates are written as RFC 3339 strings, including the null date.
pub fn to_json(blogs: &[Blog]) -> OutputResult<String> {
    let mut json = serde_json::to_string_pretty(blogs)?;
    json.push('\n');
    Ok(json)
}
