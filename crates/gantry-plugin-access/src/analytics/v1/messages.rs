//! Wire shapes of version 1 analytics request bodies.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Request body sent to a plugin, tagged by the kind of analytics wanted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalyticsRequest {
    /// Ask for one dashboard metric.
    Dashboard {
        /// Metric selector.
        data: DashboardParams,
    },
    /// Ask for one pipeline metric.
    Pipeline {
        /// Pipeline selector.
        data: PipelineParams,
    },
    /// Ask for one job metric.
    Job {
        /// Job coordinates.
        data: JobParams,
    },
}

/// Parameters of a dashboard analytics request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardParams {
    /// Identifier of the requested metric.
    pub metric: String,
}

/// Parameters of a pipeline analytics request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineParams {
    /// Name of the pipeline the metric is scoped to.
    pub pipeline_name: String,
}

/// Coordinates of the job run a metric is scoped to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobParams {
    /// Pipeline the job belongs to.
    pub pipeline_name: String,
    /// Stage the job belongs to.
    pub stage_name: String,
    /// The job's own name.
    pub job_name: String,
}

impl JobParams {
    /// Extract job coordinates from a caller-supplied parameter map.
    ///
    /// Entries beyond the three required ones are ignored.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ProtocolError> {
        Ok(Self {
            pipeline_name: require_param(params, "pipeline_name")?,
            stage_name: require_param(params, "stage_name")?,
            job_name: require_param(params, "job_name")?,
        })
    }
}

fn require_param(
    params: &HashMap<String, String>,
    param: &'static str,
) -> Result<String, ProtocolError> {
    params
        .get(param)
        .cloned()
        .ok_or(ProtocolError::MissingRequestParam { param })
}
