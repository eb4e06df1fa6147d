use serde::{Deserialize, Serialize};

/// Messages for the dashboard chart: point hover moves along the sample
/// axis and drives the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DashboardMsg {
    NextPoint,
    PrevPoint,
    Deselect,
}
