//! Analytics endpoint plumbing: request names and versioned converters.

pub mod converter;
pub mod registry;
pub mod v1;

pub use converter::AnalyticsMessageConverter;
pub use registry::ConverterRegistry;

/// Extension identifier the plugin framework routes analytics requests by.
pub const ANALYTICS_EXTENSION: &str = "analytics";

/// Request name for fetching a single analytics metric from a plugin.
pub const REQUEST_GET_ANALYTICS: &str = "gantry.analytics.get-analytics";

/// Request name for querying a plugin's advertised capabilities.
pub const REQUEST_GET_CAPABILITIES: &str = "gantry.analytics.get-capabilities";

/// Request name for fetching a plugin's bundled static assets.
pub const REQUEST_GET_STATIC_ASSETS: &str = "gantry.analytics.get-static-assets";
