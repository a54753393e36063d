//! Transport-neutral HTTP response.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::FetchError;

/// A response as returned by a `Transport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response headers.
    pub headers: HashMap<String, String>,
    /// The response body.
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Create a new response.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Create a response with a JSON body and content type.
    pub fn json_body(status: u16, body: impl Into<Vec<u8>>) -> Self {
        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::new(status, headers, body.into())
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(FetchError::from)
    }

    /// Get a header value (case-insensitive).
    pub fn header(&self, key: &str) -> Option<&str> {
        let key_lower = key.to_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_lowercase() == key_lower)
            .map(|(_, v)| v.as_str())
    }

    /// Convert to a Result, returning `FetchError::Network` for non-2xx status codes.
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::Network {
                status: self.status,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_response(status: u16, body: &[u8]) -> RawResponse {
        RawResponse::new(status, HashMap::new(), body.to_vec())
    }

    #[test]
    fn test_is_success_bounds() {
        assert!(make_response(200, b"").is_success());
        assert!(make_response(299, b"").is_success());
        assert!(!make_response(199, b"").is_success());
        assert!(!make_response(304, b"").is_success());
        assert!(!make_response(404, b"").is_success());
    }

    #[test]
    fn test_error_for_status_carries_code() {
        let err = make_response(503, b"down").error_for_status().unwrap_err();
        assert_eq!(err, FetchError::Network { status: 503 });
        assert_eq!(err.to_string(), "Network response was not ok: 503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_json_parse_error() {
        let resp = make_response(200, b"{not json");
        let err = resp.json::<serde_json::Value>().unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_header_case_insensitive() {
        let resp = RawResponse::json_body(200, "{}");
        assert_eq!(resp.header("Content-Type"), Some("application/json"));
        assert_eq!(resp.header("x-missing"), None);
    }
}
