//! Store round-trips against an in-memory SQLite database.

use jobscope_core::NewListing;
use jobscope_db::{count_listings, insert_listings, list_listings, open_store};

fn listing(title: &str, tags: &str) -> NewListing {
    NewListing {
        source: "RemoteOK".to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        tags: tags.to_string(),
        date_posted: "2024-03-01T10:00:00+00:00".to_string(),
    }
}

#[tokio::test]
async fn insert_then_list_preserves_order_and_assigns_increasing_ids() {
    let pool = open_store("sqlite::memory:").await.unwrap();

    let batch = vec![listing("Backend Engineer", "rust, go"), listing("SRE", "k8s")];
    let written = insert_listings(&pool, &batch).await.unwrap();
    assert_eq!(written, 2);

    let rows = list_listings(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].id < rows[1].id, "ids must increase: {rows:?}");
    assert_eq!(rows[0].title.as_deref(), Some("Backend Engineer"));
    assert_eq!(rows[0].tags.as_deref(), Some("rust, go"));
    assert_eq!(rows[1].source.as_deref(), Some("RemoteOK"));
    assert_eq!(rows[1].location.as_deref(), Some("Remote"));

    pool.close().await;
}

#[tokio::test]
async fn duplicate_listings_are_not_deduplicated() {
    let pool = open_store("sqlite::memory:").await.unwrap();

    let batch = vec![listing("Data Analyst", "sql")];
    insert_listings(&pool, &batch).await.unwrap();
    insert_listings(&pool, &batch).await.unwrap();

    let rows = list_listings(&pool).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_ne!(rows[0].id, rows[1].id);

    pool.close().await;
}

#[tokio::test]
async fn empty_batch_writes_nothing() {
    let pool = open_store("sqlite::memory:").await.unwrap();

    assert_eq!(insert_listings(&pool, &[]).await.unwrap(), 0);
    assert_eq!(count_listings(&pool).await.unwrap(), 0);

    pool.close().await;
}

#[tokio::test]
async fn null_columns_come_back_as_none() {
    let pool = open_store("sqlite::memory:").await.unwrap();

    sqlx::query("INSERT INTO jobs (source, title) VALUES ('RemoteOK', 'Orphan')")
        .execute(&pool)
        .await
        .unwrap();

    let rows = list_listings(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title.as_deref(), Some("Orphan"));
    assert!(rows[0].company.is_none());
    assert!(rows[0].tags.is_none());
    assert!(rows[0].date_posted.is_none());

    pool.close().await;
}
