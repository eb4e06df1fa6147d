use ratatui::prelude::*;
use ratatui::symbols::Marker;
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Widget};

use crate::domain::booking::BookingSample;
use crate::domain::chart::{ChartConfig, SeriesField};
use crate::presentation::config::styles::Theme;

/// Line chart over the normalized booking samples.
///
/// Each configured series becomes one line dataset; the x axis is the day
/// offset from the first sample and the y axis spans `[0, y_upper_bound]`.
/// A hovered point is re-plotted as a scatter dataset in the active color.
#[derive(Clone)]
pub struct BookingChartWidget<'a> {
    samples: &'a [BookingSample],
    config: &'a ChartConfig,
    selected: Option<usize>,
    theme: &'a Theme,
}

impl<'a> BookingChartWidget<'a> {
    pub fn new(
        samples: &'a [BookingSample],
        config: &'a ChartConfig,
        selected: Option<usize>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            samples,
            config,
            selected,
            theme,
        }
    }

    /// `(day offset, measure)` points for one series.
    pub fn series_points(&self, field: SeriesField) -> Vec<(f64, f64)> {
        let Some(first) = self.samples.first() else {
            return vec![];
        };
        self.samples
            .iter()
            .map(|sample| {
                let x = (sample.date - first.date).num_days() as f64;
                (x, field.extract(sample) as f64)
            })
            .collect()
    }

    /// Points for the hovered sample, one per configured series.
    pub fn highlight_points(&self) -> Vec<(f64, f64)> {
        let Some(first) = self.samples.first() else {
            return vec![];
        };
        let Some(sample) = self.selected.and_then(|i| self.samples.get(i)) else {
            return vec![];
        };
        let x = (sample.date - first.date).num_days() as f64;
        self.config
            .series
            .iter()
            .map(|binding| (x, binding.field.extract(sample) as f64))
            .collect()
    }

    /// Upper x bound, the day offset of the last sample. Points sit at day
    /// offsets, so a count-based bound would clip trailing samples whenever
    /// the dates have gaps.
    pub fn x_upper_bound(&self) -> f64 {
        match (self.samples.first(), self.samples.last()) {
            (Some(first), Some(last)) => ((last.date - first.date).num_days() as f64).max(1.0),
            _ => 1.0,
        }
    }

    /// First, middle and last date as x-axis labels.
    pub fn x_labels(&self) -> Vec<String> {
        if self.samples.is_empty() {
            return vec![];
        }
        let format = |sample: &BookingSample| sample.date.format("%d %b").to_string();
        if self.samples.len() == 1 {
            return vec![format(&self.samples[0])];
        }
        vec![
            format(&self.samples[0]),
            format(&self.samples[self.samples.len() / 2]),
            format(&self.samples[self.samples.len() - 1]),
        ]
    }

    fn series_color(&self, field: SeriesField) -> Color {
        match field {
            SeriesField::Value => self.theme.chart_value,
            SeriesField::Quantity => self.theme.chart_quantity,
        }
    }
}

impl<'a> Widget for BookingChartWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let series_data: Vec<(&'static str, Color, Vec<(f64, f64)>)> = self
            .config
            .series
            .iter()
            .map(|binding| {
                (
                    binding.name,
                    self.series_color(binding.field),
                    self.series_points(binding.field),
                )
            })
            .collect();
        let highlight = self.highlight_points();

        let mut datasets: Vec<Dataset> = series_data
            .iter()
            .map(|(name, color, points)| {
                Dataset::default()
                    .name(*name)
                    .marker(self.config.marker)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(*color))
                    .data(points)
            })
            .collect();
        if !highlight.is_empty() {
            datasets.push(
                Dataset::default()
                    .marker(Marker::Dot)
                    .graph_type(GraphType::Scatter)
                    .style(Style::default().fg(self.theme.chart_active))
                    .data(&highlight),
            );
        }

        let x_upper = self.x_upper_bound();
        let y_upper = self.config.y_upper_bound(self.samples);
        let x_labels: Vec<Line> = self.x_labels().into_iter().map(Line::from).collect();
        let y_labels = vec![
            Line::from("0"),
            Line::from(format!("{}", y_upper as u64 / 2)),
            Line::from(format!("{}", y_upper as u64)),
        ];

        let chart = Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .title(self.config.x_alias)
                    .style(Style::default().fg(self.theme.muted))
                    .labels(x_labels)
                    .bounds([0.0, x_upper]),
            )
            .y_axis(
                Axis::default()
                    .title(self.config.y_alias)
                    .style(Style::default().fg(self.theme.muted))
                    .labels(y_labels)
                    .bounds([0.0, y_upper]),
            );

        chart.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample(day: u32, value: u64, quantity: u64) -> BookingSample {
        BookingSample {
            date: NaiveDate::from_ymd_opt(2021, 10, day).expect("valid date"),
            value,
            quantity,
        }
    }

    fn samples() -> Vec<BookingSample> {
        vec![sample(21, 40, 3), sample(22, 35, 4), sample(24, 38, 5)]
    }

    #[test]
    fn test_series_points_use_day_offsets() {
        let samples = samples();
        let config = ChartConfig::default();
        let theme = Theme::default();
        let widget = BookingChartWidget::new(&samples, &config, None, &theme);

        assert_eq!(
            widget.series_points(SeriesField::Value),
            vec![(0.0, 40.0), (1.0, 35.0), (3.0, 38.0)]
        );
        assert_eq!(
            widget.series_points(SeriesField::Quantity),
            vec![(0.0, 3.0), (1.0, 4.0), (3.0, 5.0)]
        );
    }

    #[test]
    fn test_highlight_points_follow_selection() {
        let samples = samples();
        let config = ChartConfig::default();
        let theme = Theme::default();

        let widget = BookingChartWidget::new(&samples, &config, Some(1), &theme);
        assert_eq!(widget.highlight_points(), vec![(1.0, 35.0), (1.0, 4.0)]);

        let widget = BookingChartWidget::new(&samples, &config, None, &theme);
        assert!(widget.highlight_points().is_empty());

        // Out-of-range selection plots nothing.
        let widget = BookingChartWidget::new(&samples, &config, Some(10), &theme);
        assert!(widget.highlight_points().is_empty());
    }

    #[test]
    fn test_x_labels_cover_the_range() {
        let samples = samples();
        let config = ChartConfig::default();
        let theme = Theme::default();
        let widget = BookingChartWidget::new(&samples, &config, None, &theme);
        assert_eq!(widget.x_labels(), vec!["21 Oct", "22 Oct", "24 Oct"]);
    }

    #[test]
    fn test_empty_samples_render_without_panicking() {
        let samples: Vec<BookingSample> = vec![];
        let config = ChartConfig::default();
        let theme = Theme::default();
        let widget = BookingChartWidget::new(&samples, &config, None, &theme);
        assert!(widget.series_points(SeriesField::Value).is_empty());
        assert!(widget.x_labels().is_empty());

        let area = Rect::new(0, 0, 60, 15);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
    }

    #[test]
    fn test_gapped_dates_keep_the_last_point_inside_the_bounds() {
        let samples = vec![sample(1, 40, 3), sample(11, 35, 4)];
        let config = ChartConfig::default();
        let theme = Theme::default();
        let widget = BookingChartWidget::new(&samples, &config, Some(1), &theme);
        assert_eq!(widget.x_upper_bound(), 10.0);

        // The highlighted last sample must land inside the axis bounds and
        // actually hit the buffer.
        let area = Rect::new(0, 0, 60, 15);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
        let active_cells = buffer
            .content()
            .iter()
            .filter(|cell| cell.style().fg == Some(theme.chart_active))
            .count();
        assert!(active_cells > 0);
    }

    #[test]
    fn test_render_does_not_panic() {
        let samples = samples();
        let config = ChartConfig::default();
        let theme = Theme::default();
        let widget = BookingChartWidget::new(&samples, &config, Some(0), &theme);
        let area = Rect::new(0, 0, 60, 15);
        let mut buffer = Buffer::empty(area);
        widget.render(area, &mut buffer);
    }
}
