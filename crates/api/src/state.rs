//! Shared application state

use std::sync::Arc;

use crate::config::Config;
use crate::content::{ContentSource, Unavailable};
use crate::render::{
    AssetError, AssetResolver, DigestManifest, PageRenderer, PageVariant, StaticPrefix,
    VariantKind,
};

/// Everything a handler needs, cloned cheaply into each request.
#[derive(Clone)]
pub struct AppState {
    pub renderer: Arc<PageRenderer>,
    pub content: Arc<dyn ContentSource>,
    pub variant: VariantKind,
}

impl AppState {
    pub fn new(
        renderer: PageRenderer,
        content: Arc<dyn ContentSource>,
        variant: VariantKind,
    ) -> Self {
        Self {
            renderer: Arc::new(renderer),
            content,
            variant,
        }
    }

    /// Build state from configuration, with no train feed attached.
    pub fn from_config(config: &Config) -> Result<Self, AssetError> {
        let assets: Arc<dyn AssetResolver> = match &config.asset_manifest {
            Some(path) => {
                let manifest = DigestManifest::load(config.static_url_prefix.clone(), path)?;
                tracing::info!(
                    path = %path.display(),
                    entries = manifest.len(),
                    "Loaded asset manifest"
                );
                Arc::new(manifest)
            }
            None => Arc::new(StaticPrefix::new(config.static_url_prefix.clone())),
        };

        let renderer = PageRenderer::new(Arc::new(config.mirror_domains.clone()), assets)
            .with_blocked_domain(config.blocked_domain.clone());

        Ok(Self::new(renderer, Arc::new(Unavailable), config.site_variant))
    }

    /// Fresh variant for one response, carrying the configured footer kind.
    pub fn page(&self) -> PageVariant {
        PageVariant::new(self.variant)
    }
}
