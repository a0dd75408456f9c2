//! Data Transfer Objects - what front ends print or send.

use serde::{Deserialize, Serialize};

use blogspot_core::{Post, VisiblePage};

/// One post as shown in a list row or detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub id: u64,
    pub title: String,
    pub author: String,
    pub date: String,
    pub status: String,
    pub content: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.0,
            title: post.title.clone(),
            author: post.author.clone(),
            date: post.date.to_string(),
            status: post.status.to_string(),
            content: post.content.clone(),
        }
    }
}

/// A page of the post list with its footer data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPage {
    pub posts: Vec<PostView>,
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub label: String,
    pub sort_key: String,
    pub sort_direction: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub search: String,
}

impl From<&VisiblePage> for PostPage {
    fn from(page: &VisiblePage) -> Self {
        Self {
            posts: page.posts.iter().map(PostView::from).collect(),
            total: page.info.total,
            page: page.info.page_index,
            page_size: page.info.page_size,
            page_count: page.info.page_count,
            label: page.info.label(),
            sort_key: page.sort.key.to_string(),
            sort_direction: page.sort.direction.as_str().to_string(),
            search: page.search_term.clone(),
        }
    }
}
