//! # gantry-plugin-access
//!
//! Server-side access layer for Gantry analytics plugins. Provides:
//!
//! - JSON request builders and response parsers for the analytics endpoint
//! - A version-agnostic [`AnalyticsMessageConverter`] trait
//! - The version 1 protocol implementation
//! - A [`ConverterRegistry`] resolving converters by protocol version
//!
//! The crate never talks to a plugin itself; callers hand it raw JSON
//! bodies and get domain values from `gantry-plugin-domain` back.

pub mod analytics;
pub mod error;

pub use analytics::converter::AnalyticsMessageConverter;
pub use analytics::registry::ConverterRegistry;
pub use analytics::v1::AnalyticsMessageConverterV1;
pub use error::ProtocolError;
