pub mod category;
pub mod post;
pub mod tag;

pub use category::{Category, CategoryId};
pub use post::{NewPost, Post, PostId};
pub use tag::{Tag, TagId};
