//! Batch analysis over the collected `jobs` table.
//!
//! Every step is a plain function over the cleaned rows. [`analyze`] runs
//! them in order and gathers the results into an [`AnalysisReport`];
//! [`write_report`] prints it and [`export_csv`] flattens the rows to disk.

pub mod chart;
pub mod clean;
pub mod derived;
pub mod error;
pub mod export;
pub mod growth;
pub mod pipeline;
pub mod profile;
pub mod regression;
pub mod report;
pub mod tags;
pub mod trends;

pub use clean::{clean_listings, parse_posted_at, split_tags, CleanListing};
pub use derived::{annotate, AnalyzedListing};
pub use error::AnalysisError;
pub use export::export_csv;
pub use growth::{
    growth_rates, median_posted_at, tag_growth, top_growth, GrowthAnalysis, GrowthRate,
};
pub use pipeline::{analyze, AnalysisReport};
pub use regression::{fit_logit, senior_title_model, LogitFit, RegressionError};
pub use report::{write_report, ReportOptions};
pub use tags::{tag_frequency, top_tags, TagCounts};
pub use trends::{daily_counts, weekly_counts};
