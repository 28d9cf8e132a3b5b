use anyhow::Result;
use rusqlite::{params, params_from_iter, OptionalExtension, Row};
use std::sync::Arc;

use crate::base::repository::PostRepository;
use crate::data::database::ConnectionPool;
use crate::models::category::{Category, CategoryId};
use crate::models::post::{NewPost, Post, PostId};
use crate::models::tag::{Tag, TagId};

/// Post columns plus the joined category, shared by every select.
const SELECT_POSTS: &str = "SELECT p.id, p.title, p.subtitle, p.date_posted, p.read_time, \
     p.thumbnail, p.body, c.id, c.name \
     FROM posts p LEFT JOIN categories c ON p.category_id = c.id";

/// SQLite implementation of the PostRepository trait
pub struct SqlitePostRepository {
    pool: Arc<ConnectionPool>,
}

impl SqlitePostRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Maps a joined row to a Post. Tags are loaded separately.
    fn map_row(row: &Row) -> rusqlite::Result<Post> {
        let category = match row.get::<_, Option<i64>>(7)? {
            Some(id) => Some(Category {
                id: CategoryId(id),
                name: row.get(8)?,
            }),
            None => None,
        };

        Ok(Post {
            id: PostId(row.get(0)?),
            title: row.get(1)?,
            subtitle: row.get(2)?,
            date_posted: row.get(3)?,
            read_time: row.get(4)?,
            thumbnail: row.get(5)?,
            body: row.get(6)?,
            category,
            tags: Vec::new(),
        })
    }

    fn get_tags(&self, post: PostId) -> Result<Vec<Tag>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT t.id, t.name
             FROM tags t
             JOIN post_tags pt ON pt.tag_id = t.id
             WHERE pt.post_id = ?
             ORDER BY t.name",
        )?;

        let tags = stmt
            .query_map(params![post.0], |row| {
                Ok(Tag {
                    id: TagId(row.get(0)?),
                    name: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(tags)
    }

    fn load_tags(&self, posts: &mut [Post]) -> Result<()> {
        for post in posts.iter_mut() {
            post.tags = self.get_tags(post.id)?;
        }
        Ok(())
    }

    /// Runs a select built on `SELECT_POSTS`, then fills in tags.
    fn query_posts(&self, sql: &str, params: &[i64]) -> Result<Vec<Post>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(sql)?;
        let mut posts = stmt
            .query_map(params_from_iter(params.iter()), Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        drop(stmt);
        drop(conn);

        self.load_tags(&mut posts)?;
        Ok(posts)
    }
}

impl PostRepository for SqlitePostRepository {
    fn get_post(&self, id: PostId) -> Result<Option<Post>> {
        let conn = self.pool.get()?;
        let sql = format!("{SELECT_POSTS} WHERE p.id = ?");
        let post = conn
            .query_row(&sql, params![id.0], Self::map_row)
            .optional()?;
        drop(conn);

        match post {
            Some(mut post) => {
                post.tags = self.get_tags(post.id)?;
                Ok(Some(post))
            }
            None => Ok(None),
        }
    }

    fn count_posts(&self) -> Result<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM posts", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn all_post_ids(&self) -> Result<Vec<PostId>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT id FROM posts ORDER BY id")?;
        let ids = stmt
            .query_map([], |row| Ok(PostId(row.get(0)?)))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ids)
    }

    fn posts_by_ids(&self, ids: &[PostId]) -> Result<Vec<Post>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!(
            "{SELECT_POSTS} WHERE p.id IN ({placeholders}) \
             ORDER BY p.date_posted DESC, p.id DESC"
        );
        let params: Vec<i64> = ids.iter().map(|id| id.0).collect();
        self.query_posts(&sql, &params)
    }

    fn recent_posts_excluding(&self, exclude: &[PostId], limit: usize) -> Result<Vec<Post>> {
        let mut params: Vec<i64> = exclude.iter().map(|id| id.0).collect();
        let sql = if exclude.is_empty() {
            format!("{SELECT_POSTS} ORDER BY p.date_posted DESC, p.id DESC LIMIT ?")
        } else {
            let placeholders = vec!["?"; exclude.len()].join(", ");
            format!(
                "{SELECT_POSTS} WHERE p.id NOT IN ({placeholders}) \
                 ORDER BY p.date_posted DESC, p.id DESC LIMIT ?"
            )
        };
        params.push(limit as i64);
        self.query_posts(&sql, &params)
    }

    fn list_posts(&self, offset: usize, limit: usize) -> Result<Vec<Post>> {
        let sql =
            format!("{SELECT_POSTS} ORDER BY p.date_posted DESC, p.id DESC LIMIT ? OFFSET ?");
        self.query_posts(&sql, &[limit as i64, offset as i64])
    }

    fn count_posts_in_category(&self, category: CategoryId) -> Result<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM posts WHERE category_id = ?",
            params![category.0],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn list_posts_in_category(
        &self,
        category: CategoryId,
        offset: usize,
        limit: usize,
    ) -> Result<Vec<Post>> {
        let sql = format!(
            "{SELECT_POSTS} WHERE p.category_id = ? \
             ORDER BY p.date_posted DESC, p.id DESC LIMIT ? OFFSET ?"
        );
        self.query_posts(&sql, &[category.0, limit as i64, offset as i64])
    }

    fn count_posts_with_tag(&self, tag: TagId) -> Result<usize> {
        let conn = self.pool.get()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM post_tags WHERE tag_id = ?",
            params![tag.0],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn list_posts_with_tag(&self, tag: TagId, offset: usize, limit: usize) -> Result<Vec<Post>> {
        let sql = format!(
            "{SELECT_POSTS} JOIN post_tags pt ON pt.post_id = p.id WHERE pt.tag_id = ? \
             ORDER BY p.date_posted DESC, p.id DESC LIMIT ? OFFSET ?"
        );
        self.query_posts(&sql, &[tag.0, limit as i64, offset as i64])
    }

    fn create_post(&self, post: &NewPost) -> Result<PostId> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO posts (title, subtitle, category_id, date_posted, read_time, thumbnail, body)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
            params![
                post.title,
                post.subtitle,
                post.category_id.map(|c| c.0),
                post.date_posted,
                post.read_time,
                post.thumbnail,
                post.body,
            ],
        )?;
        Ok(PostId(conn.last_insert_rowid()))
    }

    fn tag_post(&self, post: PostId, tag: TagId) -> Result<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO post_tags (post_id, tag_id) VALUES (?, ?)",
            params![post.0, tag.0],
        )?;
        Ok(())
    }
}
