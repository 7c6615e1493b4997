//! Converter registry keyed by protocol version.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::analytics::converter::AnalyticsMessageConverter;
use crate::analytics::v1::AnalyticsMessageConverterV1;
use crate::error::ProtocolError;

/// Registry of analytics message converters, one per protocol version.
///
/// The registry is populated once at startup and shared read-only
/// afterwards; `resolve` hands out cheap `Arc` clones.
#[derive(Debug)]
pub struct ConverterRegistry {
    /// Protocol version → converter instance.
    converters: HashMap<String, Arc<dyn AnalyticsMessageConverter>>,
}

impl ConverterRegistry {
    /// Creates a registry with no converters.
    pub fn empty() -> Self {
        Self {
            converters: HashMap::new(),
        }
    }

    /// Registers a converter under the version it reports.
    pub fn register(
        &mut self,
        converter: Arc<dyn AnalyticsMessageConverter>,
    ) -> Result<(), ProtocolError> {
        let version = converter.version().to_string();

        if self.converters.contains_key(&version) {
            return Err(ProtocolError::DuplicateConverterVersion { version });
        }

        info!(version = %version, "Registering analytics message converter");
        self.converters.insert(version, converter);

        Ok(())
    }

    /// Resolves the converter for the protocol version a plugin reported.
    pub fn resolve(
        &self,
        version: &str,
    ) -> Result<Arc<dyn AnalyticsMessageConverter>, ProtocolError> {
        match self.converters.get(version) {
            Some(converter) => {
                debug!(version = %version, "Resolved analytics message converter");
                Ok(Arc::clone(converter))
            }
            None => {
                warn!(version = %version, "No analytics message converter for version");
                Err(ProtocolError::UnsupportedVersion {
                    version: version.to_string(),
                    supported: self.supported_versions(),
                })
            }
        }
    }

    /// Checks whether a protocol version can be served.
    pub fn supports(&self, version: &str) -> bool {
        self.converters.contains_key(version)
    }

    /// Lists the protocol versions this registry can serve, sorted.
    pub fn supported_versions(&self) -> Vec<String> {
        let mut versions: Vec<String> = self.converters.keys().cloned().collect();
        versions.sort();
        versions
    }

    /// Returns the number of registered converters.
    pub fn count(&self) -> usize {
        self.converters.len()
    }
}

impl Default for ConverterRegistry {
    /// Registry holding every protocol version this server ships.
    fn default() -> Self {
        let mut converters: HashMap<String, Arc<dyn AnalyticsMessageConverter>> = HashMap::new();
        converters.insert(
            AnalyticsMessageConverterV1::VERSION.to_string(),
            Arc::new(AnalyticsMessageConverterV1),
        );
        Self { converters }
    }
}
