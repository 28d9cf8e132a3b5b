use anyhow::Result;
use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::base::repository::CategoryRepository;
use crate::data::database::ConnectionPool;
use crate::models::category::{Category, CategoryId};

/// SQLite implementation of the CategoryRepository trait
pub struct SqliteCategoryRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteCategoryRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn map_row(row: &Row) -> rusqlite::Result<Category> {
        Ok(Category {
            id: CategoryId(row.get(0)?),
            name: row.get(1)?,
        })
    }
}

impl CategoryRepository for SqliteCategoryRepository {
    fn get_all_categories(&self) -> Result<Vec<Category>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare("SELECT id, name FROM categories ORDER BY name")?;
        let categories = stmt
            .query_map([], Self::map_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(categories)
    }

    fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let conn = self.pool.get()?;
        let category = conn
            .query_row(
                "SELECT id, name FROM categories WHERE name = ?",
                params![name],
                Self::map_row,
            )
            .optional()?;
        Ok(category)
    }

    fn create_category(&self, name: &str) -> Result<CategoryId> {
        let conn = self.pool.get()?;
        conn.execute("INSERT INTO categories (name) VALUES (?)", params![name])?;
        Ok(CategoryId(conn.last_insert_rowid()))
    }
}
