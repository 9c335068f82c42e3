//! Registration passes: load, parse, synthesize, publish.

mod loader;

use std::sync::Arc;

use dynapi_core::{parse_document_str, DocumentFormat, ParseError, SpecDocument};
use tracing::info;

use crate::config::RegistryConfig;
use crate::registry::Registry;
use crate::synth::{synthesize, DescriptorBuildError, RegistrationReport};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("failed to load spec document from '{location}': {message}")]
    Load { location: String, message: String },
    #[error(transparent)]
    Malformed(#[from] ParseError),
    #[error(transparent)]
    Build(#[from] DescriptorBuildError),
}

/// Owns a [`Registry`] and rebuilds it from a spec document on demand.
///
/// Each call to [`Provider::register`] is a full registration pass; calling it again after the
/// document changed is a reload. A failed pass leaves the registry untouched.
pub struct Provider {
    config: RegistryConfig,
    client: reqwest::Client,
    registry: Arc<Registry>,
}

impl Provider {
    pub fn new(config: RegistryConfig) -> Self {
        Self::with_registry(config, Arc::new(Registry::new()))
    }

    pub fn with_registry(config: RegistryConfig, registry: Arc<Registry>) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            registry,
        }
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Loads the document at `location` (file path or URL) and republishes the registry.
    pub async fn register(&self, location: &str) -> Result<RegistrationReport, ProviderError> {
        let text = loader::load_document(&self.client, location).await?;
        self.register_str(&text)
    }

    pub fn register_str(&self, text: &str) -> Result<RegistrationReport, ProviderError> {
        let parsed = parse_document_str(text, DocumentFormat::Auto)?;
        Ok(self.register_document(&parsed.document)?)
    }

    pub fn register_document(
        &self,
        doc: &SpecDocument,
    ) -> Result<RegistrationReport, DescriptorBuildError> {
        let synthesis = synthesize(doc, &self.config)?;
        let report = synthesis.report();
        self.registry.replace(synthesis.descriptors);
        info!(
            api = %doc.info.title,
            registered = report.registered,
            skipped = report.skipped.len(),
            "registered operations"
        );
        Ok(report)
    }
}
