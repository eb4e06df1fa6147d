use ratatui::symbols::Marker;
use serde::{Deserialize, Serialize};

use crate::domain::booking::BookingSample;

/// Which measure of a [`BookingSample`] a series plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SeriesField {
    Value,
    Quantity,
}

impl SeriesField {
    pub fn extract(&self, sample: &BookingSample) -> u64 {
        match self {
            SeriesField::Value => sample.value,
            SeriesField::Quantity => sample.quantity,
        }
    }
}

/// One plotted series: a display name bound to a sample field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesBinding {
    pub name: &'static str,
    pub field: SeriesField,
}

/// Chart configuration consumed once per render by the chart widget.
///
/// The x axis is always the sample date, the y axis the bound measure;
/// the tooltip title formats the hovered date and the tooltip content is
/// derived from the hovered sample (one entry per series).
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub x_alias: &'static str,
    pub y_alias: &'static str,
    pub marker: Marker,
    pub series: Vec<SeriesBinding>,
    /// chrono format string for the tooltip title, e.g. `%a %d` -> "Thu 21".
    pub title_format: &'static str,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            x_alias: "Date",
            y_alias: "Value",
            marker: Marker::Braille,
            series: vec![
                SeriesBinding {
                    name: "value",
                    field: SeriesField::Value,
                },
                SeriesBinding {
                    name: "quantity",
                    field: SeriesField::Quantity,
                },
            ],
            title_format: "%a %d",
        }
    }
}

impl ChartConfig {
    /// Tooltip title for a hovered sample.
    pub fn tooltip_title(&self, sample: &BookingSample) -> String {
        sample.date.format(self.title_format).to_string()
    }

    /// Tooltip content for a hovered sample: `(series name, value)` per
    /// configured series.
    pub fn tooltip_content(&self, sample: &BookingSample) -> Vec<(&'static str, u64)> {
        self.series
            .iter()
            .map(|binding| (binding.name, binding.field.extract(sample)))
            .collect()
    }

    /// Upper y-axis bound covering every configured series.
    pub fn y_upper_bound(&self, samples: &[BookingSample]) -> f64 {
        let max = samples
            .iter()
            .flat_map(|sample| {
                self.series
                    .iter()
                    .map(|binding| binding.field.extract(sample))
            })
            .max()
            .unwrap_or(0);
        // Round up to the next multiple of ten so the top label reads well.
        (max.div_ceil(10) * 10).max(10) as f64
    }
}
