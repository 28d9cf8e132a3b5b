use anyhow::{Context, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::OpenFlags;
use std::path::Path;
use std::sync::Arc;

use crate::data::repositories::{
    SqliteCategoryRepository, SqlitePostRepository, SqliteTagRepository,
};

pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Owns the SQLite connection pool and hands out repositories that
/// share it. Constructed once at startup; everything else borrows.
pub struct Database {
    pool: Arc<ConnectionPool>,
}

impl Database {
    /// Opens (creating if necessary) the database at `db_path` and
    /// applies the schema.
    pub fn new(db_path: &Path) -> Result<Self> {
        let manager = SqliteConnectionManager::file(db_path)
            .with_flags(OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_CREATE)
            .with_init(|conn| conn.execute_batch("PRAGMA foreign_keys = ON;"));

        let pool = Pool::new(manager)
            .with_context(|| format!("failed to open database at {}", db_path.display()))?;

        let conn = pool.get()?;
        conn.execute_batch(include_str!("../../data/schema.sql"))
            .context("failed to apply schema")?;
        drop(conn);

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    pub fn post_repository(&self) -> Arc<SqlitePostRepository> {
        Arc::new(SqlitePostRepository::new(self.pool.clone()))
    }

    pub fn category_repository(&self) -> Arc<SqliteCategoryRepository> {
        Arc::new(SqliteCategoryRepository::new(self.pool.clone()))
    }

    pub fn tag_repository(&self) -> Arc<SqliteTagRepository> {
        Arc::new(SqliteTagRepository::new(self.pool.clone()))
    }
}
