//! End-to-end: seed an in-memory store, run the analysis, export, reload.

use chrono::NaiveDate;
use jobscope_analysis::{analyze, export_csv, write_report, ReportOptions};
use jobscope_core::NewListing;
use jobscope_db::{insert_listings, list_listings, open_store, ListingRow};
use jobscope_sentiment::SentimentLabel;

fn listing(title: &str, tags: &str, date: &str) -> NewListing {
    NewListing {
        source: "RemoteOK".to_string(),
        title: title.to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        tags: tags.to_string(),
        date_posted: date.to_string(),
    }
}

async fn seeded_rows() -> Vec<ListingRow> {
    let pool = open_store("sqlite::memory:").await.unwrap();
    insert_listings(
        &pool,
        &[
            listing("Data Analyst", "python, sql", "2024-01-01T09:00:00+00:00"),
            listing("Senior Dev Lead", "python, sql", "2024-01-01T15:00:00+00:00"),
            listing("Machine Learning Eng", "python, ml", "2024-01-08T10:00:00+00:00"),
        ],
    )
    .await
    .unwrap();
    let rows = list_listings(&pool).await.unwrap();
    pool.close().await;
    rows
}

#[tokio::test]
async fn three_listing_scenario() {
    let report = analyze(seeded_rows().await);

    assert_eq!(report.listings.len(), 3);
    assert_eq!(
        report.top_tags,
        vec![
            ("python".to_string(), 3),
            ("sql".to_string(), 2),
            ("ml".to_string(), 1),
        ]
    );

    let jan = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    assert_eq!(report.daily, vec![(jan(1), 2), (jan(8), 1)]);
    assert_eq!(report.weekly, vec![(jan(1), 2), (jan(8), 1)]);

    // python has early count 2 (omitted); ml is new and ranked at 0.
    assert_eq!(report.growth.early_rows, 2);
    assert_eq!(report.growth.late_rows, 1);
    assert_eq!(report.growth.top.len(), 1);
    assert_eq!(report.growth.top[0].tag, "ml");
    assert_eq!(report.growth.top[0].rate, 0.0);

    assert_eq!(report.sentiment, vec![(SentimentLabel::Neutral, 3)]);
    for row in &report.listings {
        assert_eq!(row.sentiment, 0.0);
    }

    let fit = report.regression.as_ref().expect("model should fit");
    assert!(fit.converged);
    assert_eq!(fit.observations, 3);
}

#[tokio::test]
async fn export_then_reload_preserves_row_count() {
    let report = analyze(seeded_rows().await);
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("processed_job_listings_from_db.csv");

    let written = export_csv(&path, &report.listings).unwrap();
    assert_eq!(written, report.listings.len());

    let mut reader = csv::Reader::from_path(&path).unwrap();
    assert_eq!(reader.records().count(), report.listings.len());
}

#[tokio::test]
async fn unusable_rows_are_dropped_before_analysis() {
    let pool = open_store("sqlite::memory:").await.unwrap();
    insert_listings(&pool, &[listing("Dev", "go", "not a date")])
        .await
        .unwrap();
    sqlx::query("INSERT INTO jobs (source, title, company) VALUES ('RemoteOK', 'No Tags', 'Co')")
        .execute(&pool)
        .await
        .unwrap();
    let rows = list_listings(&pool).await.unwrap();
    pool.close().await;

    let report = analyze(rows);
    assert_eq!(report.profile.rows, 2);
    assert_eq!(report.listings.len(), 1);
    assert!(report.daily.is_empty(), "undated rows never reach the trend");
    assert!(report.growth.cutoff.is_none());
    assert_eq!(report.top_tags, vec![("go".to_string(), 1)]);
    assert!(report.regression.is_err());
}

#[tokio::test]
async fn report_renders_every_section() {
    let report = analyze(seeded_rows().await);
    let mut out = Vec::new();
    write_report(&mut out, &report, ReportOptions { charts: true }).unwrap();
    let text = String::from_utf8(out).unwrap();

    for heading in [
        "Data Summary",
        "Missing Values",
        "Job Posting Frequency by Day",
        "Job Posting Frequency by Week",
        "Top 10 Most Common Job Tags",
        "Top 10 Growing Skills",
        "Top Growing Skills",
        "Sentiment Distribution of Job Tags",
        "Sentiment Distribution",
        "Logit Regression Results",
    ] {
        assert!(text.contains(heading), "missing {heading:?} in:\n{text}");
    }
    assert!(text.contains("(new tag, ranked as 0)"));
}

#[tokio::test]
async fn charts_can_be_suppressed() {
    let report = analyze(seeded_rows().await);
    let mut out = Vec::new();
    write_report(&mut out, &report, ReportOptions { charts: false }).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(!text.contains("Job Posting Frequency by Day"));
    assert!(text.contains("Top Growing Skills"));
}
