//! Domain entities - the core business objects.

mod post;
pub mod seed;

pub use post::{Post, PostDate, PostFields, PostId, PostStatus};
pub use seed::{builtin_posts, merge_seed};
