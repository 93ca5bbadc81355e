//! amtrak.live Shared Types
//!
//! This crate contains the mirror-domain model shared by the site crates.

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
