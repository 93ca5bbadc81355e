//! Train data seam
//!
//! Fetching and formatting live train positions happens upstream. Whatever
//! markup a [`ContentSource`] returns fills the page's `content` region as is.
//! The JSON forms back the `/trains/json` endpoints and are passed through
//! untouched.

use serde_json::Value;

/// Supplies body markup for pages.
pub trait ContentSource: Send + Sync {
    /// Markup for the landing page.
    fn index(&self) -> String;

    /// Markup for one train, or `None` when the train is unknown.
    fn train(&self, train_number: &str) -> Option<String>;

    /// Every known train, keyed by train number.
    fn trains_json(&self) -> Value;

    /// One train's data, or `None` when the train is unknown.
    fn train_json(&self, train_number: &str) -> Option<Value>;
}

/// Used when no train feed is wired in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

pub const UNAVAILABLE_NOTICE: &str =
    r#"<section class="notice"><p>Live train data is not available right now.</p></section>"#;

impl ContentSource for Unavailable {
    fn index(&self) -> String {
        UNAVAILABLE_NOTICE.to_string()
    }

    fn train(&self, _train_number: &str) -> Option<String> {
        None
    }

    fn trains_json(&self) -> Value {
        Value::Object(serde_json::Map::new())
    }

    fn train_json(&self, _train_number: &str) -> Option<Value> {
        None
    }
}
