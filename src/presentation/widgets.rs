//! Reusable render-only widgets
//!
//! Widgets are plain structs borrowing state and a theme; each implements
//! `ratatui::widgets::Widget` and renders in a single pass.

pub mod booking_chart;
pub mod menu;
pub mod statistic;
pub mod text_field;

pub use booking_chart::BookingChartWidget;
pub use menu::MenuWidget;
pub use statistic::StatisticWidget;
pub use text_field::TextFieldWidget;
