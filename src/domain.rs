//! Domain types
//!
//! Plain data types with no I/O: routes and navigation items, booking
//! records and their normalization, chart configuration, and the
//! authentication vocabulary shared by views and services.

pub mod auth;
pub mod booking;
pub mod chart;
pub mod nav;
pub mod validation;

pub use auth::{AuthError, Credentials, Provider, Registration, Session};
pub use booking::{BookingSample, RawBookingRecord};
pub use chart::ChartConfig;
pub use nav::{nav_items, Mode, NavigationItem, Route};
pub use validation::ValidationError;
