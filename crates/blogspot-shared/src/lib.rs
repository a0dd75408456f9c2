//! # Blog Spot Shared
//!
//! Output types shared by Blog Spot front ends.

pub mod dto;
pub mod response;

pub use dto::{PostPage, PostView};
pub use response::{CommandResponse, ErrorResponse};
