//! Request context with typed parameters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::lifecycle::TimingContext;

/// Unique request identifier for tracing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID.
    pub fn generate() -> Self {
        let id = format!(
            "{:x}-{:x}",
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos(),
            next_sequence()
        );
        Self(id)
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

// No randomness source in the guest; a process-wide counter keeps ids distinct.
fn next_sequence() -> u32 {
    static SEQUENCE: AtomicU32 = AtomicU32::new(1);
    SEQUENCE.fetch_add(1, Ordering::Relaxed)
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Other,
}

/// Typed request context passed to the page handler.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// Query string parameters.
    pub query: QueryParams,
    /// Timing context for observability.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a new request context from a path that may carry a query string.
    pub fn new(method: Method, path_with_query: impl Into<String>) -> Self {
        let path_with_query = path_with_query.into();
        let (path, query) = match path_with_query.split_once('?') {
            Some((path, query)) => (path.to_string(), parse_query(query)),
            None => (path_with_query, HashMap::new()),
        };

        Self {
            request_id: RequestId::generate(),
            method,
            path,
            query,
            timing: TimingContext::new(),
        }
    }

    /// Get a query parameter by name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(|s| s.as_str())
    }
}

fn parse_query(query: &str) -> QueryParams {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (k.to_string(), v.to_string()),
            None => (pair.to_string(), String::new()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_ids_are_distinct() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn test_context_splits_query() {
        let ctx = RequestContext::new(Method::Get, "/directory?data=fixtures/a.json&debug");
        assert_eq!(ctx.path, "/directory");
        assert_eq!(ctx.query_param("data"), Some("fixtures/a.json"));
        assert_eq!(ctx.query_param("debug"), Some(""));
        assert_eq!(ctx.query_param("missing"), None);
    }

    #[test]
    fn test_context_without_query() {
        let ctx = RequestContext::new(Method::Get, "/");
        assert_eq!(ctx.path, "/");
        assert!(ctx.query.is_empty());
    }
}
