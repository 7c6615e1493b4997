//! Version-agnostic interface for analytics message converters.

use std::collections::HashMap;

use gantry_plugin_domain::analytics::{AnalyticsData, Capabilities};

use crate::error::ProtocolError;

/// Converts between server-side domain values and the JSON bodies
/// exchanged with an analytics plugin.
///
/// One implementation exists per protocol version; the registry picks the
/// right one from the version a plugin reported during handshake. All
/// implementations are stateless, so a single instance can serve requests
/// for any number of plugins concurrently.
pub trait AnalyticsMessageConverter: Send + Sync + std::fmt::Debug {
    /// Protocol version this converter speaks.
    fn version(&self) -> &'static str;

    /// Build the request body asking for a dashboard metric.
    fn dashboard_analytics_request_body(&self, metric: &str) -> Result<String, ProtocolError>;

    /// Build the request body asking for a metric of a single pipeline.
    fn pipeline_analytics_request_body(
        &self,
        pipeline_name: &str,
    ) -> Result<String, ProtocolError>;

    /// Build the request body asking for a metric of a single job run.
    ///
    /// `params` must contain `pipeline_name`, `stage_name`, and `job_name`.
    /// Entries beyond those three are ignored.
    fn job_analytics_request_body(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<String, ProtocolError>;

    /// Parse the analytics result a plugin returned.
    fn analytics_from_response_body(&self, body: &str) -> Result<AnalyticsData, ProtocolError>;

    /// Parse the capability set a plugin advertised.
    fn capabilities_from_response_body(&self, body: &str) -> Result<Capabilities, ProtocolError>;

    /// Parse the static-assets response, returning the archive payload
    /// verbatim.
    fn static_assets_from_response_body(&self, body: &str) -> Result<String, ProtocolError>;
}
