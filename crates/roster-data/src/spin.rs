//! Spin outbound HTTP transport.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{FetchError, RawResponse, Transport};

/// Sends requests through the Spin host.
///
/// Relative paths become self-requests, which need
/// `allowed_outbound_hosts = ["http://self"]` in the component manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpinTransport;

impl SpinTransport {
    fn outbound_url(url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with('/') {
            url.to_string()
        } else {
            format!("/{}", url)
        }
    }
}

#[async_trait(?Send)]
impl Transport for SpinTransport {
    async fn get(&self, url: String) -> Result<RawResponse, FetchError> {
        let req = spin_sdk::http::Request::get(Self::outbound_url(&url));
        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = *resp.status();
        Ok(RawResponse::new(status, HashMap::new(), resp.body().to_vec()))
    }
}
