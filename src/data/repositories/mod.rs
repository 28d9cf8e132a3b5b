mod category_repository;
mod post_repository;
mod tag_repository;

pub use category_repository::SqliteCategoryRepository;
pub use post_repository::SqlitePostRepository;
pub use tag_repository::SqliteTagRepository;
