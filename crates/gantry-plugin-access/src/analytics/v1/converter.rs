//! Version 1 analytics message converter.
//!
//! Response payloads are parsed in two steps: the body must first be a
//! JSON object, then required keys are projected out of it one by one.
//! Key order matters; `data` is checked before `view_path`, so a payload
//! missing both reports `data`.

use std::collections::HashMap;

use serde_json::{Map, Value};

use gantry_plugin_domain::analytics::{AnalyticsData, Capabilities, SupportedAnalytics};

use super::messages::{AnalyticsRequest, DashboardParams, JobParams, PipelineParams};
use crate::analytics::converter::AnalyticsMessageConverter;
use crate::error::ProtocolError;

/// Converter for version 1 of the analytics plugin protocol.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticsMessageConverterV1;

impl AnalyticsMessageConverterV1 {
    /// Protocol version string reported by plugins speaking this dialect.
    pub const VERSION: &'static str = "1";
}

impl AnalyticsMessageConverter for AnalyticsMessageConverterV1 {
    fn version(&self) -> &'static str {
        Self::VERSION
    }

    fn dashboard_analytics_request_body(&self, metric: &str) -> Result<String, ProtocolError> {
        let request = AnalyticsRequest::Dashboard {
            data: DashboardParams {
                metric: metric.to_string(),
            },
        };
        Ok(serde_json::to_string(&request)?)
    }

    fn pipeline_analytics_request_body(
        &self,
        pipeline_name: &str,
    ) -> Result<String, ProtocolError> {
        let request = AnalyticsRequest::Pipeline {
            data: PipelineParams {
                pipeline_name: pipeline_name.to_string(),
            },
        };
        Ok(serde_json::to_string(&request)?)
    }

    fn job_analytics_request_body(
        &self,
        params: &HashMap<String, String>,
    ) -> Result<String, ProtocolError> {
        let request = AnalyticsRequest::Job {
            data: JobParams::from_params(params)?,
        };
        Ok(serde_json::to_string(&request)?)
    }

    fn analytics_from_response_body(&self, body: &str) -> Result<AnalyticsData, ProtocolError> {
        let payload: Map<String, Value> = serde_json::from_str(body)?;

        let data = require_string(&payload, "data")?;
        let view_path = require_string(&payload, "view_path")?;

        Ok(AnalyticsData::new(data, view_path))
    }

    fn capabilities_from_response_body(&self, body: &str) -> Result<Capabilities, ProtocolError> {
        let payload: Map<String, Value> = serde_json::from_str(body)?;

        let entries = payload
            .get("supported_analytics")
            .ok_or(ProtocolError::MissingRequiredKey {
                key: "supported_analytics",
            })?;
        let supported: Vec<SupportedAnalytics> = serde_json::from_value(entries.clone())?;

        Ok(Capabilities::new(supported))
    }

    fn static_assets_from_response_body(&self, body: &str) -> Result<String, ProtocolError> {
        let payload: Map<String, Value> = serde_json::from_str(body)?;

        Ok(require_string(&payload, "assets")?.to_string())
    }
}

/// Project a required string value out of a parsed payload.
///
/// A key that is absent, `null`, or holds a non-string value is reported
/// as missing.
fn require_string<'a>(
    payload: &'a Map<String, Value>,
    key: &'static str,
) -> Result<&'a str, ProtocolError> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .ok_or(ProtocolError::MissingRequiredKey { key })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gantry_plugin_domain::analytics::AnalyticsType;
    use serde_json::json;

    const CONVERTER: AnalyticsMessageConverterV1 = AnalyticsMessageConverterV1;

    #[test]
    fn test_parses_analytics_data_from_valid_response() {
        let body = r#"{"data":"foo", "view_path":"bar.html"}"#;

        let analytics = CONVERTER.analytics_from_response_body(body).unwrap();

        assert_eq!(analytics.data, "foo");
        assert_eq!(analytics.view_path, "bar.html");
    }

    #[test]
    fn test_missing_data_key_is_reported_first() {
        let err = CONVERTER
            .analytics_from_response_body(r#"{"foo": "bar"}"#)
            .unwrap_err();

        assert!(matches!(
            err,
            ProtocolError::MissingRequiredKey { key: "data" }
        ));
        assert_eq!(err.to_string(), "Missing \"data\" key in analytics payload");
    }

    #[test]
    fn test_missing_view_path_key() {
        let err = CONVERTER
            .analytics_from_response_body(r#"{"data": "hi", "foo": "bar"}"#)
            .unwrap_err();

        assert!(matches!(
            err,
            ProtocolError::MissingRequiredKey { key: "view_path" }
        ));
        assert_eq!(
            err.to_string(),
            "Missing \"view_path\" key in analytics payload"
        );
    }

    #[test]
    fn test_null_or_non_string_value_counts_as_missing() {
        let null_err = CONVERTER
            .analytics_from_response_body(r#"{"data": null, "view_path": "x.html"}"#)
            .unwrap_err();
        assert!(matches!(
            null_err,
            ProtocolError::MissingRequiredKey { key: "data" }
        ));

        let number_err = CONVERTER
            .analytics_from_response_body(r#"{"data": "d", "view_path": 42}"#)
            .unwrap_err();
        assert!(matches!(
            number_err,
            ProtocolError::MissingRequiredKey { key: "view_path" }
        ));
    }

    #[test]
    fn test_malformed_body_is_not_a_missing_key() {
        for body in ["not json at all", r#"["data", "view_path"]"#, "", "42"] {
            let err = CONVERTER.analytics_from_response_body(body).unwrap_err();
            assert!(
                matches!(err, ProtocolError::MalformedPayload(_)),
                "expected MalformedPayload for {body:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn test_empty_string_values_are_accepted() {
        let analytics = CONVERTER
            .analytics_from_response_body(r#"{"data": "", "view_path": ""}"#)
            .unwrap();

        assert_eq!(analytics.data, "");
        assert_eq!(analytics.view_path, "");
    }

    #[test]
    fn test_dashboard_request_body() {
        let body = CONVERTER
            .dashboard_analytics_request_body("anything")
            .unwrap();

        let actual: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            actual,
            json!({"type": "dashboard", "data": {"metric": "anything"}})
        );
    }

    #[test]
    fn test_pipeline_request_body() {
        let body = CONVERTER
            .pipeline_analytics_request_body("build-linux")
            .unwrap();

        let actual: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            actual,
            json!({"type": "pipeline", "data": {"pipeline_name": "build-linux"}})
        );
    }

    #[test]
    fn test_job_request_body() {
        let params = HashMap::from([
            ("pipeline_name".to_string(), "build-linux".to_string()),
            ("stage_name".to_string(), "compile".to_string()),
            ("job_name".to_string(), "unit-tests".to_string()),
        ]);

        let body = CONVERTER.job_analytics_request_body(&params).unwrap();

        let actual: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            actual,
            json!({
                "type": "job",
                "data": {
                    "pipeline_name": "build-linux",
                    "stage_name": "compile",
                    "job_name": "unit-tests"
                }
            })
        );
    }

    #[test]
    fn test_request_bodies_escape_special_characters() {
        let metric = "throughput \"p95\" \\ µs";

        let body = CONVERTER.dashboard_analytics_request_body(metric).unwrap();

        let actual: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(actual["data"]["metric"], metric);
    }

    #[test]
    fn test_job_request_body_with_incomplete_params() {
        let params = HashMap::from([("pipeline_name".to_string(), "build-linux".to_string())]);

        let err = CONVERTER.job_analytics_request_body(&params).unwrap_err();

        assert!(matches!(err, ProtocolError::MissingRequestParam { .. }));
    }

    #[test]
    fn test_parses_capabilities() {
        let body = r#"{
            "supported_analytics": [
                {"type": "dashboard", "id": "mttr", "title": "Mean Time to Recovery"},
                {"type": "pipeline", "id": "build-time", "title": "Build Time"}
            ]
        }"#;

        let capabilities = CONVERTER.capabilities_from_response_body(body).unwrap();

        assert_eq!(capabilities.supported_analytics.len(), 2);
        assert!(capabilities.supports(AnalyticsType::Dashboard));
        assert_eq!(capabilities.supported_analytics[1].id, "build-time");
    }

    #[test]
    fn test_empty_capabilities_are_valid() {
        let capabilities = CONVERTER
            .capabilities_from_response_body(r#"{"supported_analytics": []}"#)
            .unwrap();

        assert!(capabilities.supported_analytics.is_empty());
    }

    #[test]
    fn test_missing_supported_analytics_key() {
        let err = CONVERTER
            .capabilities_from_response_body(r#"{"analyses": []}"#)
            .unwrap_err();

        assert!(matches!(
            err,
            ProtocolError::MissingRequiredKey {
                key: "supported_analytics"
            }
        ));
        assert_eq!(
            err.to_string(),
            "Missing \"supported_analytics\" key in analytics payload"
        );
    }

    #[test]
    fn test_undecodable_capability_entries_are_malformed() {
        let body = r#"{"supported_analytics": [{"type": "nonsense", "id": "x", "title": "X"}]}"#;

        let err = CONVERTER.capabilities_from_response_body(body).unwrap_err();

        assert!(matches!(err, ProtocolError::MalformedPayload(_)));
    }

    #[test]
    fn test_parses_static_assets() {
        let assets = CONVERTER
            .static_assets_from_response_body(r#"{"assets": "UEsDBBQACAg="}"#)
            .unwrap();

        assert_eq!(assets, "UEsDBBQACAg=");
    }

    #[test]
    fn test_missing_assets_key() {
        let err = CONVERTER
            .static_assets_from_response_body(r#"{"files": "UEsDBBQACAg="}"#)
            .unwrap_err();

        assert!(matches!(
            err,
            ProtocolError::MissingRequiredKey { key: "assets" }
        ));
        assert_eq!(
            err.to_string(),
            "Missing \"assets\" key in analytics payload"
        );
    }
}
