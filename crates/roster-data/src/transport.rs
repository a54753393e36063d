//! Outbound request seam.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{FetchError, RawResponse};

/// Issues a GET for a fully resolved URL or path.
///
/// Futures are not required to be `Send`: the page runs on a single
/// cooperative task, and the Spin guest has no threads.
#[async_trait(?Send)]
pub trait Transport {
    /// Perform a GET and return the raw response, whatever its status.
    async fn get(&self, url: String) -> Result<RawResponse, FetchError>;
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for Box<T> {
    async fn get(&self, url: String) -> Result<RawResponse, FetchError> {
        (**self).get(url).await
    }
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn get(&self, url: String) -> Result<RawResponse, FetchError> {
        (**self).get(url).await
    }
}

/// Transport answering from a fixed table of responses.
///
/// Unknown URLs answer 404. Every call is recorded.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: HashMap<String, Result<RawResponse, FetchError>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `url` with a JSON body and status.
    pub fn with_json(self, url: impl Into<String>, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.with_response(url, RawResponse::json_body(status, body))
    }

    /// Answer `url` with a prepared response.
    pub fn with_response(mut self, url: impl Into<String>, response: RawResponse) -> Self {
        self.routes.insert(url.into(), Ok(response));
        self
    }

    /// Fail `url` at the transport level.
    pub fn with_error(mut self, url: impl Into<String>, error: FetchError) -> Self {
        self.routes.insert(url.into(), Err(error));
        self
    }

    /// URLs requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn get(&self, url: String) -> Result<RawResponse, FetchError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(url.clone());

        match self.routes.get(&url) {
            Some(result) => result.clone(),
            None => Ok(RawResponse::new(404, HashMap::new(), Vec::new())),
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn test_mock_unknown_url_is_404() {
        let mock = MockTransport::new();
        let resp = block_on(mock.get("nope.json".to_string())).unwrap();
        assert_eq!(resp.status, 404);
        assert_eq!(mock.calls(), vec!["nope.json"]);
    }

    #[test]
    fn test_boxed_transport_delegates() {
        let mock: Box<dyn Transport> = Box::new(
            MockTransport::new().with_error("x", FetchError::Connection("refused".into())),
        );
        let err = block_on(mock.get("x".to_string())).unwrap_err();
        assert_eq!(err, FetchError::Connection("refused".into()));
    }
}
