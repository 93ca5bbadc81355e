//! Per-request rendering context

use std::convert::Infallible;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

/// Host and path of the request being rendered.
///
/// The host is the raw `Host` header value. It is attacker-controlled and
/// must only ever reach a page through an escaping template.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestContext {
    pub host: String,
    pub path: String,
}

impl RequestContext {
    pub fn new(host: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            path: path.into(),
        }
    }

    /// Missing or non-UTF-8 `Host` headers become the empty string.
    pub fn from_headers(headers: &HeaderMap, path: &str) -> Self {
        let host = headers
            .get(header::HOST)
            .and_then(|h| h.to_str().ok())
            .unwrap_or_default();
        Self::new(host, path)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_headers(&parts.headers, parts.uri.path()))
    }
}
