//! Host-derived page metadata

use crate::context::RequestContext;

pub const OG_DESCRIPTION: &str = "Live Amtrak train locations and status.";
pub const OG_IMAGE_PATH: &str = "/static/opengraph.png";

/// Title and Open Graph values for one request.
///
/// Every field is a plain function of the request's host and path. Values are
/// unescaped here; templates escape them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub og_title: String,
    pub og_url: String,
    pub og_image: String,
    pub og_description: &'static str,
    pub og_type: &'static str,
}

impl PageMetadata {
    pub fn from_context(ctx: &RequestContext) -> Self {
        Self {
            title: ctx.host.clone(),
            og_title: ctx.host.clone(),
            og_url: format!("https://{}{}", ctx.host, ctx.path),
            og_image: format!("https://{}{}", ctx.host, OG_IMAGE_PATH),
            og_description: OG_DESCRIPTION,
            og_type: "website",
        }
    }

    pub fn canonical_url(&self) -> &str {
        &self.og_url
    }
}
