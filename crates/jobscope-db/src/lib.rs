use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

pub mod listings;

pub use listings::{count_listings, insert_listings, list_listings, ListingRow};

/// Single table shared by the collector (writer) and the analyzer (reader).
const CREATE_JOBS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS jobs (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    source TEXT,
    title TEXT,
    company TEXT,
    location TEXT,
    tags TEXT,
    date_posted TEXT
)";

#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid database URL \"{url}\": {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Open the SQLite store, creating the file if it does not exist.
///
/// The pool holds exactly one connection that never idles out, so a
/// `sqlite::memory:` URL keeps its contents for the life of the pool. Callers
/// own the pool and should `close()` it on every exit path.
///
/// # Errors
///
/// Returns [`DbError::InvalidUrl`] if the URL cannot be parsed, or
/// [`DbError::Sqlx`] if the connection cannot be established.
pub async fn connect_pool(database_url: &str) -> Result<SqlitePool, DbError> {
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(|source| DbError::InvalidUrl {
            url: database_url.to_string(),
            source,
        })?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Create the `jobs` table if it is absent. The schema is never migrated.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the statement fails.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query(CREATE_JOBS_TABLE).execute(pool).await?;
    tracing::debug!("jobs table ready");
    Ok(())
}

/// Connect and make sure the schema exists.
///
/// # Errors
///
/// See [`connect_pool`] and [`ensure_schema`].
pub async fn open_store(database_url: &str) -> Result<SqlitePool, DbError> {
    let pool = connect_pool(database_url).await?;
    if let Err(e) = ensure_schema(&pool).await {
        pool.close().await;
        return Err(e);
    }
    Ok(pool)
}

/// Send a `SELECT 1` to verify the pool has a live connection.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn ping(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_store_opens_and_pings() {
        let pool = open_store("sqlite::memory:").await.unwrap();
        ping(&pool).await.unwrap();
        pool.close().await;
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let pool = open_store("sqlite::memory:").await.unwrap();
        ensure_schema(&pool).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        pool.close().await;
    }

    #[tokio::test]
    async fn unreachable_path_fails_to_connect() {
        let result = connect_pool("sqlite:///definitely/missing/dir/jobs.db").await;
        assert!(result.is_err(), "expected connect error, got: {result:?}");
    }
}
