//! Horizontal text bar charts for the terminal.

use std::fmt;

const DEFAULT_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
}

impl BarChart {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            bars: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_bars<I, L>(mut self, bars: I) -> Self
    where
        I: IntoIterator<Item = (L, f64)>,
        L: Into<String>,
    {
        self.bars
            .extend(bars.into_iter().map(|(label, value)| (label.into(), value)));
        self
    }

    /// Renders with the longest bar `width` cells wide. Negative values are
    /// drawn with a lighter glyph.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        let mut out = format!("{}\n", self.title);
        out.push_str(&format!("{} vs {}\n", self.y_label, self.x_label));

        if self.bars.is_empty() {
            out.push_str("  (no data)\n");
            return out;
        }

        let label_width = self
            .bars
            .iter()
            .map(|(label, _)| label.chars().count())
            .max()
            .unwrap_or(0);
        let max_abs = self
            .bars
            .iter()
            .map(|(_, v)| v.abs())
            .fold(0.0_f64, f64::max);

        for (label, value) in &self.bars {
            let cells = bar_cells(value.abs(), max_abs, width);
            let glyph = if *value < 0.0 { "░" } else { "█" };
            out.push_str(&format!(
                "  {label:<label_width$} | {} {}\n",
                glyph.repeat(cells),
                format_value(*value)
            ));
        }
        out
    }
}

impl fmt::Display for BarChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_WIDTH))
    }
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
fn bar_cells(value: f64, max: f64, width: usize) -> usize {
    if max <= 0.0 {
        return 0;
    }
    ((value / max) * width as f64).round() as usize
}

fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value:.3}")
    }
}
