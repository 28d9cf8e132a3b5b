pub mod repository;

pub use repository::{CategoryRepository, PostRepository, TagRepository};
