//! Page variants and the regions they can fill

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Named slots of the page skeleton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    ExtraHead,
    ExtraJs,
    Manifest,
    Opengraph,
    FooterDisclaimer,
    Content,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::ExtraHead,
        Region::ExtraJs,
        Region::Manifest,
        Region::Opengraph,
        Region::FooterDisclaimer,
        Region::Content,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Region::ExtraHead => "extra_head",
            Region::ExtraJs => "extra_js",
            Region::Manifest => "manifest",
            Region::Opengraph => "opengraph",
            Region::FooterDisclaimer => "footer_disclaimer",
            Region::Content => "content",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which footer the site runs with. Chosen by operators, never by request data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariantKind {
    /// Trademark disclaimer in the footer.
    #[default]
    Standard,
    /// Access-problem banner in place of the disclaimer.
    Outage,
}

impl VariantKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VariantKind::Standard => "standard",
            VariantKind::Outage => "outage",
        }
    }
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown site variant: {0}")]
pub struct UnknownVariant(pub String);

impl FromStr for VariantKind {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "normal" => Ok(VariantKind::Standard),
            "outage" => Ok(VariantKind::Outage),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Region overrides selected for one response.
///
/// Values are trusted, already-rendered markup; they are inserted verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageVariant {
    pub kind: VariantKind,
    overrides: BTreeMap<Region, String>,
}

impl PageVariant {
    pub fn new(kind: VariantKind) -> Self {
        Self {
            kind,
            overrides: BTreeMap::new(),
        }
    }

    /// Set `region`, replacing any earlier value for it.
    pub fn with_region(mut self, region: Region, markup: impl Into<String>) -> Self {
        self.overrides.insert(region, markup.into());
        self
    }

    pub fn region(&self, region: Region) -> Option<&str> {
        self.overrides.get(&region).map(String::as_str)
    }
}
