//! Page composition
//!
//! One skeleton, filled per request. Each region is resolved exactly once:
//! the variant's override when it has one, otherwise the region default,
//! otherwise nothing. A default that fails to render is left empty so the
//! document is always produced.

use std::sync::Arc;

use amtrak_live_shared::{AlternateDomains, CanonicalDomainSet};
use askama::Template;
use tracing::{debug, warn};

use super::assets::AssetResolver;
use super::metadata::PageMetadata;
use super::templates::{
    Disclaimer, Layout, ManifestLink, MirrorLink, MirrorList, OpenGraph, OutageBanner,
};
use super::variant::{PageVariant, Region, VariantKind};
use crate::context::RequestContext;

pub const STYLESHEET_ASSET: &str = "site.css";
pub const SCRIPT_ASSET: &str = "app.js";
pub const MANIFEST_ASSET: &str = "manifest.json";

#[derive(Debug, thiserror::Error)]
#[error("Failed to render page: {0}")]
pub struct RenderError(#[from] askama::Error);

/// Renders complete documents for any host in (or outside) the mirror set.
///
/// Holds nothing that changes after startup, so one instance is shared by
/// every request.
#[derive(Clone)]
pub struct PageRenderer {
    domains: Arc<CanonicalDomainSet>,
    assets: Arc<dyn AssetResolver>,
    blocked_domain: Option<String>,
}

impl PageRenderer {
    pub fn new(domains: Arc<CanonicalDomainSet>, assets: Arc<dyn AssetResolver>) -> Self {
        Self {
            domains,
            assets,
            blocked_domain: None,
        }
    }

    /// Domain named by the outage banner.
    pub fn with_blocked_domain(mut self, blocked_domain: Option<String>) -> Self {
        self.blocked_domain = blocked_domain;
        self
    }

    pub fn domains(&self) -> &CanonicalDomainSet {
        &self.domains
    }

    pub fn assets(&self) -> &dyn AssetResolver {
        self.assets.as_ref()
    }

    pub fn render(
        &self,
        variant: &PageVariant,
        ctx: &RequestContext,
    ) -> Result<String, RenderError> {
        let meta = PageMetadata::from_context(ctx);
        let alternates = self.domains.alternates_for(&ctx.host);

        debug!(
            host = %ctx.host,
            path = %ctx.path,
            variant = %variant.kind,
            alternates = %alternates.joined(),
            "Rendering page"
        );

        let region = |r: Region| self.region(r, variant, &meta, &alternates);
        let layout = Layout {
            meta: &meta,
            stylesheet: self.assets.resolve(STYLESHEET_ASSET),
            script: self.assets.resolve(SCRIPT_ASSET),
            manifest: region(Region::Manifest),
            opengraph: region(Region::Opengraph),
            extra_head: region(Region::ExtraHead),
            content: region(Region::Content),
            footer_disclaimer: region(Region::FooterDisclaimer),
            extra_js: region(Region::ExtraJs),
        };

        Ok(layout.render()?)
    }

    fn region(
        &self,
        region: Region,
        variant: &PageVariant,
        meta: &PageMetadata,
        alternates: &AlternateDomains,
    ) -> String {
        if let Some(markup) = variant.region(region) {
            return markup.to_string();
        }

        let rendered = match region {
            Region::ExtraHead | Region::ExtraJs | Region::Content => return String::new(),
            Region::Manifest => {
                let href = self.assets.resolve(MANIFEST_ASSET);
                ManifestLink { href: &href }.render()
            }
            Region::Opengraph => OpenGraph { meta }.render(),
            Region::FooterDisclaimer => self.footer(variant.kind, alternates),
        };

        rendered.unwrap_or_else(|e| {
            warn!(
                region = %region,
                error = %e,
                "Region default failed to render, leaving it empty"
            );
            String::new()
        })
    }

    /// The standard disclaimer and the outage banner are alternatives; only
    /// the one matching `kind` is ever rendered.
    fn footer(&self, kind: VariantKind, alternates: &AlternateDomains) -> askama::Result<String> {
        let mirrors = MirrorList {
            links: alternates
                .links()
                .map(|(separator, host)| MirrorLink { separator, host })
                .collect(),
        }
        .render()?;
        let has_mirrors = !alternates.is_empty();

        match kind {
            VariantKind::Standard => Disclaimer {
                mirrors: &mirrors,
                has_mirrors,
            }
            .render(),
            VariantKind::Outage => OutageBanner {
                blocked: self.blocked_domain.as_deref(),
                mirrors: &mirrors,
                has_mirrors,
            }
            .render(),
        }
    }
}
