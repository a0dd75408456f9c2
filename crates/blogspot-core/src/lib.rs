//! # Blog Spot Core
//!
//! The domain layer of the Blog Spot post administration tool.
//! This crate contains the post model, the repository, query, form and
//! pagination logic, with zero infrastructure dependencies. Storage and
//! time come in through the traits in [`ports`].

pub mod domain;
pub mod error;
pub mod form;
pub mod pagination;
pub mod ports;
pub mod query;
pub mod repository;
pub mod session;

#[cfg(test)]
mod test_support;

pub use domain::{Post, PostDate, PostFields, PostId, PostStatus};
pub use error::{DomainError, StoreError};
pub use form::{FormController, FormField, PostForm, ValidationErrors};
pub use pagination::{PageInfo, Pagination};
pub use query::{SortDirection, SortKey, SortState};
pub use repository::PostRepository;
pub use session::{AdminSession, Dialog, ThemeMode, VisiblePage};
