//! Unified error type for the analytics plugin protocol.
//!
//! Every failure the converters and the registry can report is a variant
//! of `ProtocolError`, so callers branch on the variant instead of
//! inspecting message strings. The rendered messages are part of the
//! plugin contract and surface verbatim in server logs and API errors.

use thiserror::Error;

/// Unified error type for all analytics message conversion operations.
#[derive(Debug, Error)]
pub enum ProtocolError {
    // --- Response parsing errors ---
    /// A required key was absent from an otherwise well-formed payload.
    #[error("Missing \"{key}\" key in analytics payload")]
    MissingRequiredKey {
        /// The key that was expected at the top level of the payload.
        key: &'static str,
    },

    /// The payload was not valid JSON, or not the shape the protocol
    /// requires (for example a top-level array, or a capability entry
    /// that does not decode).
    #[error("Malformed analytics payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    // --- Request building errors ---
    /// A required parameter was absent from the caller-supplied map.
    #[error("Missing \"{param}\" parameter in analytics request")]
    MissingRequestParam {
        /// The parameter that the request body needs.
        param: &'static str,
    },

    // --- Registry errors ---
    /// No converter is registered for the requested protocol version.
    #[error("Unsupported analytics protocol version: {version} (supported: {})", .supported.join(", "))]
    UnsupportedVersion {
        /// The version the plugin reported.
        version: String,
        /// Versions the registry can serve, sorted.
        supported: Vec<String>,
    },

    /// A converter for this protocol version is already registered.
    #[error("A converter for analytics protocol version {version} is already registered")]
    DuplicateConverterVersion {
        /// The version that was registered twice.
        version: String,
    },
}
