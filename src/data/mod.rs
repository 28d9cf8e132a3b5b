pub mod database;
pub mod pagination;
pub mod repositories;

pub use database::Database;
pub use pagination::Page;
pub use repositories::{SqliteCategoryRepository, SqlitePostRepository, SqliteTagRepository};
