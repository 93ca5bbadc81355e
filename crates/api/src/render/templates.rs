//! askama template bindings
//!
//! `.html` templates escape every interpolated value unless it passes
//! through `|safe`; only pre-rendered region markup does.

use askama::Template;

use super::metadata::PageMetadata;

#[derive(Template)]
#[template(path = "layout.html")]
pub(crate) struct Layout<'a> {
    pub meta: &'a PageMetadata,
    pub stylesheet: String,
    pub script: String,
    pub manifest: String,
    pub opengraph: String,
    pub extra_head: String,
    pub content: String,
    pub footer_disclaimer: String,
    pub extra_js: String,
}

#[derive(Template)]
#[template(path = "opengraph.html")]
pub(crate) struct OpenGraph<'a> {
    pub meta: &'a PageMetadata,
}

#[derive(Template)]
#[template(path = "manifest_link.html")]
pub(crate) struct ManifestLink<'a> {
    pub href: &'a str,
}

pub(crate) struct MirrorLink<'a> {
    pub separator: &'static str,
    pub host: &'a str,
}

#[derive(Template)]
#[template(path = "mirrors.html")]
pub(crate) struct MirrorList<'a> {
    pub links: Vec<MirrorLink<'a>>,
}

#[derive(Template)]
#[template(path = "disclaimer.html")]
pub(crate) struct Disclaimer<'a> {
    pub mirrors: &'a str,
    pub has_mirrors: bool,
}

#[derive(Template)]
#[template(path = "outage_banner.html")]
pub(crate) struct OutageBanner<'a> {
    pub blocked: Option<&'a str>,
    pub mirrors: &'a str,
    pub has_mirrors: bool,
}

#[derive(Template)]
#[template(path = "train_script.html")]
pub struct TrainScript<'a> {
    pub src: &'a str,
    pub number: &'a str,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFound<'a> {
    pub path: &'a str,
}
