//! Version 1 of the analytics plugin protocol.

pub mod converter;
pub mod messages;

pub use converter::AnalyticsMessageConverterV1;
pub use messages::{AnalyticsRequest, DashboardParams, JobParams, PipelineParams};
