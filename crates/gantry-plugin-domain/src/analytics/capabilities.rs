//! Analytics capability descriptors advertised by a plugin.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of analytics a plugin can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalyticsType {
    /// Server-wide metrics shown on the analytics dashboard.
    Dashboard,
    /// Metrics scoped to a single pipeline.
    Pipeline,
    /// Metrics scoped to a single job run.
    Job,
}

impl AnalyticsType {
    /// Return the type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Pipeline => "pipeline",
            Self::Job => "job",
        }
    }
}

impl fmt::Display for AnalyticsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One analytics metric a plugin advertises in its capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedAnalytics {
    /// Kind of analytics this metric belongs to.
    #[serde(rename = "type")]
    pub analytics_type: AnalyticsType,
    /// Metric identifier, unique within the plugin.
    pub id: String,
    /// Human-readable title shown in the UI.
    pub title: String,
}

impl SupportedAnalytics {
    /// Create a capability entry.
    pub fn new(
        analytics_type: AnalyticsType,
        id: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            analytics_type,
            id: id.into(),
            title: title.into(),
        }
    }
}

/// Full capability set advertised by an analytics plugin.
///
/// An empty set is valid; such a plugin loads but contributes nothing to
/// the analytics dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Metrics the plugin can produce, in advertised order.
    pub supported_analytics: Vec<SupportedAnalytics>,
}

impl Capabilities {
    /// Create capabilities from a list of supported metrics.
    pub fn new(supported_analytics: Vec<SupportedAnalytics>) -> Self {
        Self {
            supported_analytics,
        }
    }

    /// Check if the plugin advertises any metric of the given kind.
    pub fn supports(&self, analytics_type: AnalyticsType) -> bool {
        self.supported_analytics
            .iter()
            .any(|s| s.analytics_type == analytics_type)
    }

    /// Return the advertised metrics of the given kind, preserving order.
    pub fn supported_of_type(&self, analytics_type: AnalyticsType) -> Vec<&SupportedAnalytics> {
        self.supported_analytics
            .iter()
            .filter(|s| s.analytics_type == analytics_type)
            .collect()
    }
}
