//! `Store` backed by the `kv` table.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::Store;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    /// Open `path`, running pending migrations first.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self {
            pool: DbPool::open_initialized(path)?,
        })
    }

    pub fn from_pool(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl Store for SqliteStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        upsert(&self.pool.conn, key, value, &Local::now().to_rfc3339())?;
        Ok(())
    }

    /// All keys in one transaction; a failed write leaves every key as it was.
    fn set_many(&mut self, entries: &[(&str, &str)]) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let tx = self.pool.conn.transaction()?;
        for (key, value) in entries {
            upsert(&tx, key, value, &now)?;
        }
        tx.commit()?;
        Ok(())
    }
}

fn upsert(conn: &Connection, key: &str, value: &str, now: &str) -> rusqlite::Result<usize> {
    conn.execute(
        r#"
        INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
        "#,
        params![key, value, now],
    )
}
