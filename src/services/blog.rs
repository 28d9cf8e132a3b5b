use rand::seq::SliceRandom;
use rand::thread_rng;
use std::sync::Arc;
use thiserror::Error;

use crate::base::repository::{CategoryRepository, PostRepository, TagRepository};
use crate::data::pagination::{self, Page};
use crate::models::{Category, Post, PostId, Tag};

/// Posts highlighted on the home page.
pub const FEATURED_COUNT: usize = 2;
/// Recent posts listed under the featured ones.
pub const RECENT_COUNT: usize = 5;
pub const INDEX_PAGE_SIZE: usize = 10;
pub const CATEGORY_PAGE_SIZE: usize = 4;
pub const TAG_PAGE_SIZE: usize = 8;

/// Failure surface of the view queries. `NotFound` covers unknown
/// posts, unknown categories and pages past the end; everything else
/// is an internal fault.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug)]
pub struct HomeView {
    pub featured: Vec<Post>,
    pub recent: Vec<Post>,
}

#[derive(Debug)]
pub struct IndexView {
    pub posts: Page<Post>,
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
}

#[derive(Debug)]
pub struct CategoryView {
    pub category: Category,
    pub posts: Page<Post>,
}

#[derive(Debug)]
pub struct TagView {
    /// None when the tag name did not resolve; the page is then empty.
    pub tag: Option<Tag>,
    pub posts: Page<Post>,
}

#[derive(Debug)]
pub struct PostView {
    pub post: Post,
    pub total_posts: usize,
}

/// Query layer behind the views: one operation per route, read-only.
#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
    tags: Arc<dyn TagRepository>,
}

impl BlogService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        categories: Arc<dyn CategoryRepository>,
        tags: Arc<dyn TagRepository>,
    ) -> Self {
        Self {
            posts,
            categories,
            tags,
        }
    }

    /// Home page: up to two distinct posts sampled uniformly at random
    /// as "featured", plus the most recent posts outside that set. With
    /// fewer than two posts the featured list just shrinks.
    pub fn home(&self) -> Result<HomeView, QueryError> {
        let ids = self.posts.all_post_ids()?;
        let featured_ids: Vec<_> = ids
            .choose_multiple(&mut thread_rng(), FEATURED_COUNT)
            .copied()
            .collect();

        let featured = self.posts.posts_by_ids(&featured_ids)?;
        let recent = self
            .posts
            .recent_posts_excluding(&featured_ids, RECENT_COUNT)?;

        Ok(HomeView { featured, recent })
    }

    /// All posts, newest first, ten per page, with the category and tag
    /// lists for the sidebar. Pages past the end are NotFound.
    pub fn index_page(&self, number: usize) -> Result<IndexView, QueryError> {
        let total = self.posts.count_posts()?;
        let posts = self.strict_page(number, INDEX_PAGE_SIZE, total, |offset, limit| {
            self.posts.list_posts(offset, limit)
        })?;

        Ok(IndexView {
            posts,
            categories: self.categories.get_all_categories()?,
            tags: self.tags.get_all_tags()?,
        })
    }

    /// Posts in the named category, four per page. An unknown name is
    /// NotFound, as is a page past the end.
    pub fn category_page(&self, name: &str, number: usize) -> Result<CategoryView, QueryError> {
        let category = self
            .categories
            .find_category_by_name(name)?
            .ok_or(QueryError::NotFound)?;

        let total = self.posts.count_posts_in_category(category.id)?;
        let posts = self.strict_page(number, CATEGORY_PAGE_SIZE, total, |offset, limit| {
            self.posts.list_posts_in_category(category.id, offset, limit)
        })?;

        Ok(CategoryView { category, posts })
    }

    /// Posts carrying the named tag, eight per page. Unknown tags and
    /// pages past the end both degrade to an empty page, never an error.
    pub fn tag_page(&self, name: &str, number: usize) -> Result<TagView, QueryError> {
        let Some(tag) = self.tags.find_tag_by_name(name)? else {
            return Ok(TagView {
                tag: None,
                posts: Page::empty(number, TAG_PAGE_SIZE, 0),
            });
        };

        let total = self.posts.count_posts_with_tag(tag.id)?;
        // Page 0 degrades like any other out-of-range page here
        let posts = if number == 0 || number > pagination::page_count(total, TAG_PAGE_SIZE) {
            Page::empty(number, TAG_PAGE_SIZE, total)
        } else {
            let items = self.posts.list_posts_with_tag(
                tag.id,
                pagination::offset(number, TAG_PAGE_SIZE),
                TAG_PAGE_SIZE,
            )?;
            Page::new(items, number, TAG_PAGE_SIZE, total)
        };

        Ok(TagView {
            tag: Some(tag),
            posts,
        })
    }

    /// A single post plus the total post count for the sibling UI.
    pub fn post(&self, id: i64) -> Result<PostView, QueryError> {
        let post = self
            .posts
            .get_post(PostId(id))?
            .ok_or(QueryError::NotFound)?;
        let total_posts = self.posts.count_posts()?;

        Ok(PostView { post, total_posts })
    }

    /// Strict pagination: any page past the last is NotFound. Page 1 is
    /// always valid so an empty result set still renders.
    fn strict_page<F>(
        &self,
        number: usize,
        per_page: usize,
        total: usize,
        fetch: F,
    ) -> Result<Page<Post>, QueryError>
    where
        F: FnOnce(usize, usize) -> anyhow::Result<Vec<Post>>,
    {
        if number == 0 || (number > pagination::page_count(total, per_page) && number != 1) {
            return Err(QueryError::NotFound);
        }

        let items = fetch(pagination::offset(number, per_page), per_page)?;
        Ok(Page::new(items, number, per_page, total))
    }
}
