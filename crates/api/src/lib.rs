//! amtrak.live site library
//!
//! Serves the same pages under every mirror domain, with metadata and the
//! mirror list adjusted to the host each visitor arrived on.

pub mod config;
pub mod content;
pub mod context;
pub mod error;
pub mod render;
pub mod routes;
pub mod security;
pub mod state;

pub use config::Config;
pub use context::RequestContext;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
