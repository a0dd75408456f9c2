//! Rendering of command results as text tables or JSON envelopes.

use serde::Serialize;

use blogspot_shared::{CommandResponse, ErrorResponse, PostPage, PostView};

use crate::cli::OutputFormat;

const TITLE_WIDTH: usize = 48;
const AUTHOR_WIDTH: usize = 20;

pub fn print_page(page: &PostPage, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&CommandResponse::ok(page)),
        OutputFormat::Table => {
            println!("{}", render_page(page));
            Ok(())
        }
    }
}

pub fn print_post(post: &PostView, message: Option<&str>, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => match message {
            Some(message) => print_json(&CommandResponse::ok_with_message(post, message)),
            None => print_json(&CommandResponse::ok(post)),
        },
        OutputFormat::Table => {
            if let Some(message) = message {
                println!("{message}");
            }
            println!("{}", render_post(post));
            Ok(())
        }
    }
}

pub fn print_message(message: &str, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => print_json(&CommandResponse::message(message)),
        OutputFormat::Table => {
            println!("{message}");
            Ok(())
        }
    }
}

pub fn print_error(error: &ErrorResponse, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            if let Ok(body) = serde_json::to_string_pretty(error) {
                println!("{body}");
            }
        }
        OutputFormat::Table => eprintln!("{}", render_error(error)),
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn render_page(page: &PostPage) -> String {
    if page.posts.is_empty() {
        return format!("No posts found.\n{}", footer(page));
    }

    let id_width = page
        .posts
        .iter()
        .map(|p| p.id.to_string().len())
        .max()
        .unwrap_or(2)
        .max(2);

    let mut lines = Vec::with_capacity(page.posts.len() + 3);
    lines.push(format!(
        "{:<id_width$}  {:<TITLE_WIDTH$}  {:<AUTHOR_WIDTH$}  {:<10}  {}",
        "ID", "TITLE", "AUTHOR", "DATE", "STATUS"
    ));
    for post in &page.posts {
        lines.push(format!(
            "{:<id_width$}  {:<TITLE_WIDTH$}  {:<AUTHOR_WIDTH$}  {:<10}  {}",
            post.id,
            truncate(&post.title, TITLE_WIDTH),
            truncate(&post.author, AUTHOR_WIDTH),
            post.date,
            post.status
        ));
    }
    lines.push(footer(page));
    lines.join("\n")
}

fn footer(page: &PostPage) -> String {
    let mut footer = format!(
        "{}  (page {} of {}, sorted by {} {})",
        page.label,
        page.page + 1,
        page.page_count.max(1),
        page.sort_key,
        page.sort_direction
    );
    if !page.search.is_empty() {
        footer.push_str(&format!(", search \"{}\"", page.search));
    }
    footer
}

pub fn render_post(post: &PostView) -> String {
    format!(
        "#{} {}\nAuthor: {}\nDate:   {}\nStatus: {}\n\n{}",
        post.id, post.title, post.author, post.date, post.status, post.content
    )
}

pub fn render_error(error: &ErrorResponse) -> String {
    let mut out = format!("error: {}", error.title);
    if let Some(detail) = &error.detail {
        out.push_str(&format!(": {detail}"));
    }
    for (field, message) in &error.fields {
        out.push_str(&format!("\n  {field}: {message}"));
    }
    out
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}
