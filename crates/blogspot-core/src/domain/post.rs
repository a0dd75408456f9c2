use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DomainError;

/// Unique post identifier, stored as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(PostId)
            .map_err(|_| DomainError::InvalidId(s.to_string()))
    }
}

/// Publication state of a post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Draft => "Draft",
            PostStatus::Published => "Published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PostStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "draft" => Ok(PostStatus::Draft),
            "published" => Ok(PostStatus::Published),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

/// Calendar date a post was created on.
///
/// Dates assigned here are `YYYY-MM-DD`. Any other stored string, such as a
/// locale date like `17/10/2026`, is kept verbatim: day-first and month-first
/// forms cannot be told apart, so it is never reinterpreted. ISO dates order
/// chronologically and before verbatim ones; verbatim dates order as text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PostDate {
    Iso(NaiveDate),
    Raw(String),
}

impl PostDate {
    pub const ISO_FORMAT: &'static str = "%Y-%m-%d";

    /// Strict ISO parse.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        NaiveDate::parse_from_str(s.trim(), Self::ISO_FORMAT)
            .map(PostDate::Iso)
            .map_err(|_| DomainError::InvalidDate(s.to_string()))
    }

    /// Read a stored date without losing anything: ISO when it parses,
    /// otherwise the original text.
    pub fn from_stored(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|_| PostDate::Raw(s.to_string()))
    }

    /// Builds a date from literal parts. Only used for built-in data.
    pub(crate) fn ymd(year: i32, month: u32, day: u32) -> Self {
        PostDate::Iso(NaiveDate::from_ymd_opt(year, month, day).expect("Valid built-in date"))
    }
}

impl From<NaiveDate> for PostDate {
    fn from(date: NaiveDate) -> Self {
        PostDate::Iso(date)
    }
}

impl fmt::Display for PostDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PostDate::Iso(date) => f.pad(&date.format(Self::ISO_FORMAT).to_string()),
            PostDate::Raw(raw) => f.pad(raw),
        }
    }
}

impl Serialize for PostDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PostDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(PostDate::from_stored(&raw))
    }
}

/// The user-editable part of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFields {
    pub title: String,
    pub author: String,
    pub content: String,
    pub status: PostStatus,
}

impl PostFields {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        content: impl Into<String>,
        status: PostStatus,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            content: content.into(),
            status,
        }
    }
}

/// Post entity - a single blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub author: String,
    pub date: PostDate,
    pub status: PostStatus,
    pub content: String,
}

impl Post {
    /// Create a post from its editable fields plus the assigned id and date.
    pub fn new(id: PostId, date: PostDate, fields: PostFields) -> Self {
        Self {
            id,
            title: fields.title,
            author: fields.author,
            date,
            status: fields.status,
            content: fields.content,
        }
    }

    /// Overwrite every editable field, keeping `id` and `date`.
    pub fn apply(&mut self, fields: PostFields) {
        self.title = fields.title;
        self.author = fields.author;
        self.content = fields.content;
        self.status = fields.status;
    }

    pub fn fields(&self) -> PostFields {
        PostFields {
            title: self.title.clone(),
            author: self.author.clone(),
            content: self.content.clone(),
            status: self.status,
        }
    }
}
