//! # Student Store
//!
//! SQLite-backed persistence for student records using sqlx.
//!
//! The store owns a connection pool and an embedded schema executed once on
//! open (schema setup is a one-time step, there are no migration files). All
//! timeouts are bounded: pool acquisition and the SQLite busy handler both
//! give up after [`STORE_TIMEOUT`], surfacing as `StoreUnavailable`.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::errors::ServiceResult;

mod ops;
mod query;

/// Bound on store waits (pool acquisition, busy handler)
pub const STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// Database schema - executed once on open
const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    roll INTEGER NOT NULL,
    city TEXT NOT NULL,
    external_id TEXT NOT NULL UNIQUE
);

CREATE INDEX IF NOT EXISTS idx_students_name ON students(name);
";

/// Store handle wrapping a pooled SQLite connection
#[derive(Clone)]
pub struct StudentStore {
    pool: SqlitePool,
}

impl StudentStore {
    /// Open or create a student database at the given URL
    /// (e.g. `sqlite:students.db`)
    pub async fn open(url: &str) -> ServiceResult<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .busy_timeout(STORE_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .acquire_timeout(STORE_TIMEOUT)
            .connect_with(options)
            .await?;

        init_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// Open a private in-memory database.
    ///
    /// A single connection is used so every operation sees the same database;
    /// in-memory SQLite databases are per-connection otherwise.
    pub async fn in_memory() -> ServiceResult<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .acquire_timeout(STORE_TIMEOUT)
            .connect("sqlite::memory:")
            .await?;

        init_schema(&pool).await?;
        Ok(Self { pool })
    }

    pub(crate) fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Initialize the database schema
async fn init_schema(pool: &SqlitePool) -> ServiceResult<()> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}
