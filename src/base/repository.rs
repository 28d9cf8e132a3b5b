use anyhow::Result;

use crate::models::{
    category::{Category, CategoryId},
    post::{NewPost, Post, PostId},
    tag::{Tag, TagId},
};

/// Read surface over posts, plus the insert operations the external
/// data loader (and the tests) use. Request handlers never mutate.
pub trait PostRepository: Send + Sync {
    fn get_post(&self, id: PostId) -> Result<Option<Post>>;
    fn count_posts(&self) -> Result<usize>;
    fn all_post_ids(&self) -> Result<Vec<PostId>>;
    /// Posts with the given ids, newest first. Ids that do not exist
    /// are silently skipped.
    fn posts_by_ids(&self, ids: &[PostId]) -> Result<Vec<Post>>;
    /// Up to `limit` most recent posts whose id is not in `exclude`,
    /// newest first.
    fn recent_posts_excluding(&self, exclude: &[PostId], limit: usize) -> Result<Vec<Post>>;
    fn list_posts(&self, offset: usize, limit: usize) -> Result<Vec<Post>>;
    fn count_posts_in_category(&self, category: CategoryId) -> Result<usize>;
    fn list_posts_in_category(
        &self,
        category: CategoryId,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Post>>;
    fn count_posts_with_tag(&self, tag: TagId) -> Result<usize>;
    fn list_posts_with_tag(&self, tag: TagId, offset: usize, limit: usize) -> Result<Vec<Post>>;
    fn create_post(&self, post: &NewPost) -> Result<PostId>;
    fn tag_post(&self, post: PostId, tag: TagId) -> Result<()>;
}

pub trait CategoryRepository: Send + Sync {
    fn get_all_categories(&self) -> Result<Vec<Category>>;
    /// Case-sensitive exact-name lookup. Absence is an `Ok(None)`,
    /// never an error; callers must branch on it.
    fn find_category_by_name(&self, name: &str) -> Result<Option<Category>>;
    fn create_category(&self, name: &str) -> Result<CategoryId>;
}

pub trait TagRepository: Send + Sync {
    fn get_all_tags(&self) -> Result<Vec<Tag>>;
    /// Case-sensitive exact-name lookup, absent as `Ok(None)`.
    fn find_tag_by_name(&self, name: &str) -> Result<Option<Tag>>;
    fn create_tag(&self, name: &str) -> Result<TagId>;
}
