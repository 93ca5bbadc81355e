//! Application configuration

use std::env;
use std::path::PathBuf;

use amtrak_live_shared::{CanonicalDomainSet, DomainError};

use crate::render::VariantKind;

pub const DEFAULT_MIRROR_DOMAINS: &str = "amtrack.live,amtrak.live,trains.durbin.ee";

/// Application configuration loaded from environment variables
///
/// Read once at startup. Changing any value, including the mirror list,
/// needs a restart.
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub bind_address: String,

    // Mirrors
    pub mirror_domains: CanonicalDomainSet,
    pub site_variant: VariantKind,
    pub blocked_domain: Option<String>,

    // Static assets
    pub static_dir: PathBuf,
    pub static_url_prefix: String,
    pub asset_manifest: Option<PathBuf>,

    // Logging
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            // Server
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:9000".to_string()),

            // Mirrors
            mirror_domains: CanonicalDomainSet::parse(
                &env::var("MIRROR_DOMAINS").unwrap_or_else(|_| DEFAULT_MIRROR_DOMAINS.to_string()),
            )?,
            site_variant: {
                let raw = env::var("SITE_VARIANT").unwrap_or_else(|_| "standard".to_string());
                raw.parse::<VariantKind>().map_err(|_| ConfigError::InvalidVariant(raw))?
            },
            blocked_domain: env::var("BLOCKED_DOMAIN")
                .ok()
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),

            // Static assets
            static_dir: env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
            static_url_prefix: env::var("STATIC_URL_PREFIX")
                .unwrap_or_else(|_| "/static/".to_string()),
            asset_manifest: env::var("ASSET_MANIFEST").ok().map(PathBuf::from),

            // Logging
            log_json: parse_bool("LOG_JSON", false)?,
        })
    }
}

fn parse_bool(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Err(_) => Ok(default),
        Ok(v) => match v.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(true),
            "0" | "false" | "no" | "" => Ok(false),
            _ => Err(ConfigError::InvalidBool(name, v)),
        },
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid SITE_VARIANT {0:?}: expected \"standard\" or \"outage\"")]
    InvalidVariant(String),
    #[error("Invalid MIRROR_DOMAINS: {0}")]
    InvalidDomains(#[from] DomainError),
    #[error("Invalid boolean for {0}: {1:?}")]
    InvalidBool(&'static str, String),
}
