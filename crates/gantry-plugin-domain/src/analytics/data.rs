//! Analytics result returned by a plugin.

use serde::{Deserialize, Serialize};

/// Result of a single analytics request served by a plugin.
///
/// The `data` field is an opaque string; plugins usually put serialized
/// JSON in it, but the server never inspects it. The `view_path` names
/// the static asset that renders the data, relative to the plugin's
/// unpacked assets root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsData {
    /// Opaque analytics payload produced by the plugin.
    pub data: String,
    /// Path of the view that renders the payload.
    pub view_path: String,
}

impl AnalyticsData {
    /// Create analytics data from its two components.
    pub fn new(data: impl Into<String>, view_path: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            view_path: view_path.into(),
        }
    }
}
