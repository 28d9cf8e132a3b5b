pub mod blog;

pub use blog::{BlogService, QueryError};
