//! Markdown report generation
//!
//! One section per blog: heading, URL, post counts, then a table of posts.

use crate::model::{Blog, Post};
use crate::variables::count_words_in;

/// Formats blogs as a markdown report
pub fn format_markdown(blogs: &[Blog]) -> String {
    let mut md = String::new();

    for blog in blogs {
        format_blog(&mut md, blog);
    }

    md
}

fn format_blog(md: &mut String, blog: &Blog) {
    let heading = if blog.title.is_empty() {
        blog.url.as_str()
    } else {
        blog.title.as_str()
    };
    md.push_str(&format!("# {}\n\n", escape(heading)));

    md.push_str(&format!("- **URL**: {}\n", blog.url));
    md.push_str(&format!("- **Posts**: {}\n", blog.posts.len()));

    let skipped = blog.posts.iter().filter(|post| post.is_empty()).count();
    if skipped > 0 {
        md.push_str(&format!("- **Unparseable Posts**: {}\n", skipped));
    }
    md.push('\n');

    if blog.posts.is_empty() {
        return;
    }

    md.push_str("| Id | Title | Date | Images | Words |\n");
    md.push_str("|----|-------|------|--------|-------|\n");
    for post in blog.parsed_posts() {
        md.push_str(&format_post_row(post));
    }
    md.push('\n');
}

fn format_post_row(post: &Post) -> String {
    let date = if post.has_date() {
        post.date.format("%Y-%m-%d %H:%M").to_string()
    } else {
        "-".to_string()
    };

    format!(
        "| {} | {} | {} | {} | {} |\n",
        escape(&post.id),
        escape(&post.title),
        date,
        post.images.len(),
        count_words_in(post)
    )
}

/// Escapes characters that would break a table cell
fn escape(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}
