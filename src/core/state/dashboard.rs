use crate::core::cmd::Cmd;
use crate::core::msg::dashboard::DashboardMsg;
use crate::domain::booking::{sample_dataset, BookingSample};
use crate::domain::chart::ChartConfig;

/// Dashboard state: the normalized sample dataset, the chart configuration,
/// the hovered point and the two summary statistics.
///
/// The statistics are literal values, not derived from the samples. The
/// hosted dashboard ships them hard-coded and this port keeps that
/// behavior; see DESIGN.md.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub samples: Vec<BookingSample>,
    pub chart: ChartConfig,
    pub selected: Option<usize>,
    pub booking_value: u64,
    pub booking_quantity: u64,
}

impl Default for DashboardState {
    fn default() -> Self {
        let samples = match sample_dataset() {
            Ok(samples) => samples,
            Err(e) => {
                log::error!("Failed to load the embedded sample dataset: {e}");
                vec![]
            }
        };
        Self {
            samples,
            chart: ChartConfig::default(),
            selected: None,
            booking_value: 112_893,
            booking_quantity: 45,
        }
    }
}

impl DashboardState {
    /// Dashboard-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: DashboardMsg) -> Vec<Cmd> {
        match msg {
            DashboardMsg::NextPoint => {
                self.selected = match self.selected {
                    _ if self.samples.is_empty() => None,
                    None => Some(0),
                    Some(i) => Some((i + 1).min(self.samples.len() - 1)),
                };
            }
            DashboardMsg::PrevPoint => {
                self.selected = match self.selected {
                    _ if self.samples.is_empty() => None,
                    None => Some(self.samples.len() - 1),
                    Some(i) => Some(i.saturating_sub(1)),
                };
            }
            DashboardMsg::Deselect => {
                self.selected = None;
            }
        }
        vec![]
    }

    pub fn selected_sample(&self) -> Option<&BookingSample> {
        self.selected.and_then(|i| self.samples.get(i))
    }
}
