//! Console rendering of an [`AnalysisReport`].

use std::io::{self, Write};

use crate::chart::BarChart;
use crate::pipeline::AnalysisReport;

#[derive(Debug, Clone, Copy)]
pub struct ReportOptions {
    pub charts: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self { charts: true }
    }
}

/// Writes the summaries to `out`. Unless disabled, each chart is printed
/// ahead of the summary it belongs to.
///
/// # Errors
///
/// Propagates any write error from `out`.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &AnalysisReport,
    options: ReportOptions,
) -> io::Result<()> {
    section(out, "Data Summary")?;
    write!(out, "{}", report.profile)?;

    section(out, "Missing Values")?;
    write!(out, "{}", report.missing)?;

    let [daily, weekly, tags, growth, sentiment] = charts(report);
    let shown = options.charts;

    chart(out, &daily, shown)?;
    chart(out, &weekly, shown)?;
    chart(out, &tags, shown)?;

    chart(out, &growth, shown)?;
    section(out, "Top Growing Skills")?;
    match report.growth.cutoff {
        None => writeln!(out, "no dated listings; growth not computed")?,
        Some(cutoff) => {
            writeln!(
                out,
                "split at {} ({} early / {} late listings)",
                cutoff.format("%Y-%m-%d %H:%M:%S"),
                report.growth.early_rows,
                report.growth.late_rows
            )?;
            writeln!(out, "{:<24}{:>7}{:>7}{:>10}", "TAG", "EARLY", "LATE", "GROWTH")?;
            for g in &report.growth.top {
                let note = if g.is_new() { "  (new tag, ranked as 0)" } else { "" };
                writeln!(
                    out,
                    "{:<24}{:>7}{:>7}{:>10.3}{note}",
                    g.tag, g.early_count, g.late_count, g.rate
                )?;
            }
        }
    }

    chart(out, &sentiment, shown)?;
    section(out, "Sentiment Distribution")?;
    for (label, count) in &report.sentiment {
        writeln!(out, "{:<10}{count:>6}", label.as_str())?;
    }

    section(out, "Logistic Regression: Is Senior Role by Title Length")?;
    match &report.regression {
        Ok(fit) => writeln!(out, "{fit}")?,
        Err(e) => writeln!(out, "model not fitted: {e}")?,
    }

    Ok(())
}

/// Daily trend, weekly trend, top tags, top growth, sentiment.
fn charts(report: &AnalysisReport) -> [BarChart; 5] {
    let daily = BarChart::new("Job Posting Frequency by Day", "Date", "Number of Job Postings")
        .with_bars(count_bars(
            report
                .daily
                .iter()
                .map(|(d, n)| (d.format("%Y-%m-%d").to_string(), *n)),
        ));

    let weekly = BarChart::new("Job Posting Frequency by Week", "Week", "Number of Job Postings")
        .with_bars(count_bars(
            report
                .weekly
                .iter()
                .map(|(d, n)| (format!("week of {}", d.format("%Y-%m-%d")), *n)),
        ));

    let tags = BarChart::new("Top 10 Most Common Job Tags", "Skill/Tag", "Frequency")
        .with_bars(count_bars(report.top_tags.iter().cloned()));

    let growth = BarChart::new("Top 10 Growing Skills", "Skill/Tag", "Growth Rate")
        .with_bars(report.growth.top.iter().map(|g| (g.tag.clone(), g.rate)));

    let sentiment = BarChart::new(
        "Sentiment Distribution of Job Tags",
        "Sentiment",
        "Number of Jobs",
    )
    .with_bars(count_bars(
        report
            .sentiment
            .iter()
            .map(|(label, n)| (label.to_string(), *n)),
    ));

    [daily, weekly, tags, growth, sentiment]
}

fn chart<W: Write>(out: &mut W, chart: &BarChart, shown: bool) -> io::Result<()> {
    if shown {
        writeln!(out)?;
        write!(out, "{chart}")?;
    }
    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- {title} ---")
}

#[allow(clippy::cast_precision_loss)]
fn count_bars<I>(counts: I) -> impl Iterator<Item = (String, f64)>
where
    I: IntoIterator<Item = (String, usize)>,
{
    counts.into_iter().map(|(label, n)| (label, n as f64))
}
