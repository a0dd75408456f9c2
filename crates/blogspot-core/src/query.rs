//! Query engine - derives the visible post order from the collection.
//!
//! Pure functions only: filter by a case-insensitive substring of title or
//! author, then stable-sort by one column.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Post;
use crate::error::DomainError;

/// Sortable column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Title,
    Author,
    Date,
    Status,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Title, SortKey::Author, SortKey::Date, SortKey::Status];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Title => "title",
            SortKey::Author => "author",
            SortKey::Date => "date",
            SortKey::Status => "status",
        }
    }

    fn compare(&self, a: &Post, b: &Post) -> Ordering {
        match self {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Author => a.author.cmp(&b.author),
            SortKey::Date => a.date.cmp(&b.date),
            SortKey::Status => a.status.cmp(&b.status),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::InvalidSortKey(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction. Defaults to title ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Header-click semantics: same key flips direction, a new key starts ascending.
    pub fn toggle(&mut self, key: SortKey) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            self.key = key;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// True when `term` occurs in the title or author, ignoring case.
pub fn matches(post: &Post, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    post.title.to_lowercase().contains(&needle) || post.author.to_lowercase().contains(&needle)
}

/// Filter `posts` by `search_term` and order them by `sort`.
pub fn view(posts: &[Post], search_term: &str, sort: SortState) -> Vec<Post> {
    let mut visible: Vec<Post> = posts
        .iter()
        .filter(|p| matches(p, search_term))
        .cloned()
        .collect();

    visible.sort_by(|a, b| {
        let ordering = sort.key.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    visible
}
