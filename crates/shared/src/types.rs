//! Mirror domain types used across the site

use serde::Serialize;

use crate::DomainError;

/// Characters that never appear in a hostname we are willing to serve under.
const FORBIDDEN_HOST_CHARS: &[char] = &['/', '<', '>', '"', '\'', '&', '@'];

// =============================================================================
// Canonical domain set
// =============================================================================

/// Ordered list of every hostname the site is mirrored under.
///
/// Loaded once at startup and shared read-only between requests. Order is
/// display order in the footer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CanonicalDomainSet(Vec<String>);

impl CanonicalDomainSet {
    /// Build a set from hosts as given. Duplicates and empty entries are kept.
    pub fn new(hosts: Vec<String>) -> Self {
        Self(hosts)
    }

    /// Parse a comma-separated list such as `amtrak.live, trains.durbin.ee`.
    ///
    /// Blank segments are skipped; a segment that could not be a hostname is
    /// rejected so it never reaches a rendered link.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut hosts = Vec::new();
        for segment in raw.split(',') {
            let host = segment.trim();
            if host.is_empty() {
                continue;
            }
            if host
                .chars()
                .any(|c| c.is_whitespace() || FORBIDDEN_HOST_CHARS.contains(&c))
            {
                return Err(DomainError::InvalidHost {
                    index: hosts.len(),
                    host: host.to_string(),
                });
            }
            hosts.push(host.to_string());
        }
        Ok(Self(hosts))
    }

    pub fn hosts(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mirrors to advertise to a visitor who reached us through `host`.
    ///
    /// The first entry equal to `host` (exact, case-sensitive) is left out;
    /// an unknown host gets the full list.
    pub fn alternates_for(&self, host: &str) -> AlternateDomains {
        let mut hosts = self.0.clone();
        if let Some(pos) = hosts.iter().position(|h| h == host) {
            hosts.remove(pos);
        }
        AlternateDomains(hosts)
    }
}

// =============================================================================
// Alternate domains
// =============================================================================

/// Per-request list of mirrors other than the one being visited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AlternateDomains(Vec<String>);

impl AlternateDomains {
    pub fn hosts(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pairs each host with the text that precedes it in a sentence:
    /// nothing for the first, `" or "` for the last, `", "` otherwise.
    pub fn links(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        let last = self.0.len().saturating_sub(1);
        self.0.iter().enumerate().map(move |(i, host)| {
            let separator = match i {
                0 => "",
                i if i == last => " or ",
                _ => ", ",
            };
            (separator, host.as_str())
        })
    }

    /// Plain-text form, e.g. `a.live, b.live or c.live`.
    pub fn joined(&self) -> String {
        self.links().fold(String::new(), |mut out, (sep, host)| {
            out.push_str(sep);
            out.push_str(host);
            out
        })
    }
}
