pub mod base;
pub mod config;
pub mod data;
pub mod models;
pub mod services;
pub mod utils;
pub mod web;

// Re-export repository traits
pub use base::repository::{CategoryRepository, PostRepository, TagRepository};

// Re-export models
pub use models::{
    category::{Category, CategoryId},
    post::{NewPost, Post, PostId},
    tag::{Tag, TagId},
};

pub use config::Config;
pub use data::{Database, Page};
pub use services::{BlogService, QueryError};
