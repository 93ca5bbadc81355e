//! Host-aware page rendering
//!
//! A single page skeleton with named regions, filled from a [`PageVariant`]
//! and per-request metadata derived from the `Host` header.

pub mod assets;
mod engine;
pub mod metadata;
mod templates;
mod variant;

pub use assets::{AssetError, AssetResolver, DigestManifest, StaticPrefix};
pub use engine::{PageRenderer, RenderError, MANIFEST_ASSET, SCRIPT_ASSET, STYLESHEET_ASSET};
pub use metadata::PageMetadata;
pub use templates::{NotFound, TrainScript};
pub use variant::{PageVariant, Region, UnknownVariant, VariantKind};
