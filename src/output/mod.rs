//! Output module for rendering extracted blogs
//!
//! This module handles:
//! - JSON export of the full blog records
//! - Markdown reports with per-post summaries
//! - Writing either rendering to a file or stdout

mod json;
mod markdown;

pub use json::to_json;
pub use markdown::format_markdown;

use crate::model::Blog;
use serde::Deserialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Rendering of the extracted blogs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    #[default]
    Json,

    /// Human-readable Markdown report
    Markdown,
}

/// Renders blogs in the requested format
pub fn render(blogs: &[Blog], format: OutputFormat) -> OutputResult<String> {
    match format {
        OutputFormat::Json => to_json(blogs),
        OutputFormat::Markdown => Ok(format_markdown(blogs)),
    }
}

/// Renders blogs and writes them to `path`, or stdout when `path` is `None`
///
/// # Arguments
///
/// * `blogs` - The extracted blogs
/// * `format` - Output rendering
/// * `path` - Destination file
///
/// # Returns
///
/// * `Ok(())` - Successfully wrote output
/// * `Err(OutputError)` - Failed to render or write
pub fn write_output(blogs: &[Blog], format: OutputFormat, path: Option<&Path>) -> OutputResult<()> {
    let rendered = render(blogs, format)?;

    match path {
        Some(path) => {
            let mut file = File::create(path)?;
            file.write_all(rendered.as_bytes())?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(rendered.as_bytes())?;
            handle.flush()?;
        }
    }

    Ok(())
}
