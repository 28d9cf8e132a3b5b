use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::base::repository::TagRepository;
use crate::data::database::ConnectionPool;
use crate::models::tag::{Tag, TagId};

/// SQLite implementation of the TagRepository trait
pub struct SqliteTagRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteTagRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn map_row(row: &Row) -> rusqlite::Result<Tag> {
        Ok(Tag {
            id: TagId(row.get(0)?),
            name: row.get(1)?,
        })
    }
}

impl TagRepository for SqliteTagRepository {
    fn get_all_tags(&self) -> Result<Vec<Tag>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT id, name FROM tags ORDER BY name")?;
        let tags = stmt
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(tags)
    }

    fn find_tag_by_name(&self, name: &str) -> Result<Option<Tag>> {
        let conn = self.pool.get()?;
        let tag = conn
            .query_row(
                "SELECT id, name FROM tags WHERE name = ?",
                params![name],
                Self::map_row,
            )
            .optional()?;
        Ok(tag)
    }

    fn create_tag(&self, name: &str) -> Result<TagId> {
        let conn = self.pool.get()?;
        conn.execute("INSERT INTO tags (name) VALUES (?)", params![name])?;
        Ok(TagId(conn.last_insert_rowid()))
    }
}
