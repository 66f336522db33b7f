//! Database operations for the `jobs` table.

use jobscope_core::NewListing;
use sqlx::SqlitePool;

use crate::DbError;

/// A row from the `jobs` table.
///
/// Every text column is nullable in the schema, so the analyzer decides which
/// rows are usable.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ListingRow {
    pub id: i64,
    pub source: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub tags: Option<String>,
    pub date_posted: Option<String>,
}

/// Appends `listings` in a single transaction and returns how many rows were
/// written. An empty slice is a no-op that never touches the database.
///
/// No deduplication is attempted; inserting the same listing twice yields two
/// rows with distinct ids.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any insert or the commit fails. Nothing from
/// the batch is kept in that case.
pub async fn insert_listings(pool: &SqlitePool, listings: &[NewListing]) -> Result<usize, DbError> {
    if listings.is_empty() {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    for listing in listings {
        sqlx::query(
            "INSERT INTO jobs (source, title, company, location, tags, date_posted) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&listing.source)
        .bind(&listing.title)
        .bind(&listing.company)
        .bind(&listing.location)
        .bind(&listing.tags)
        .bind(&listing.date_posted)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(listings.len())
}

/// Returns every stored listing ordered by id.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn list_listings(pool: &SqlitePool) -> Result<Vec<ListingRow>, DbError> {
    let rows = sqlx::query_as::<_, ListingRow>(
        "SELECT id, source, title, company, location, tags, date_posted \
         FROM jobs ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Returns the number of rows in the `jobs` table.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if the query fails.
pub async fn count_listings(pool: &SqlitePool) -> Result<i64, DbError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
        .fetch_one(pool)
        .await?;
    Ok(count)
}
