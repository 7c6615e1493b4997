//! Analytics domain values: produced data and advertised capabilities.

pub mod capabilities;
pub mod data;

pub use capabilities::{AnalyticsType, Capabilities, SupportedAnalytics};
pub use data::AnalyticsData;
