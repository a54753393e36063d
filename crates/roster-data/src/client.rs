//! Fetch client with two interchangeable strategies.
//!
//! `fetch_chained` composes the request as future combinators;
//! `fetch_linear` writes the same steps as one `async` body. For the same
//! transport response they return the same value or the same `FetchError`
//! and log the same entries, differing only in the `strategy` field.
//!
//! Neither strategy retries, applies a timeout or supports cancellation
//! beyond dropping the future; the transport's own limits apply.

use std::future::Future;

use futures::future::{self, TryFutureExt};
use roster_core::DEFAULT_DATA_PATH;
use roster_observability::StructuredLogger;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::{FetchError, Transport};

/// Which fetch strategy produced a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Combinator chain.
    Chained,
    /// Single `async` body.
    Linear,
}

impl FetchStrategy {
    /// Label used in log entries.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chained => "chained",
            Self::Linear => "linear",
        }
    }
}

impl std::fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Client fetching JSON documents through a `Transport`.
pub struct FetchClient<T> {
    transport: T,
    base_url: Option<String>,
    logger: StructuredLogger,
}

impl<T: Transport> FetchClient<T> {
    /// Create a new fetch client.
    pub fn new(transport: T, logger: StructuredLogger) -> Self {
        Self {
            transport,
            base_url: None,
            logger,
        }
    }

    /// Prepend a base URL to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Resolve an optional path against the default path and base URL.
    pub fn resolve_url(&self, path: Option<&str>) -> String {
        let path = path.unwrap_or(DEFAULT_DATA_PATH);
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        match &self.base_url {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => path.to_string(),
        }
    }

    /// Fetch and decode with chained continuations.
    pub fn fetch_chained<'a, D>(
        &'a self,
        path: Option<&str>,
    ) -> impl Future<Output = Result<D, FetchError>> + 'a
    where
        D: DeserializeOwned + 'a,
    {
        let url = self.resolve_url(path);
        let ok_url = url.clone();
        let err_url = url.clone();

        self.transport
            .get(url)
            .and_then(|response| future::ready(response.error_for_status()))
            .and_then(|response| future::ready(response.json::<Value>()))
            .and_then(|payload| future::ready(decode::<D>(payload)))
            .inspect_ok(move |(payload, _)| {
                self.log_success(FetchStrategy::Chained, &ok_url, payload)
            })
            .inspect_err(move |err| self.log_failure(FetchStrategy::Chained, &err_url, err))
            .map_ok(|(_, data)| data)
    }

    /// Fetch and decode as a single suspend-and-resume sequence.
    pub async fn fetch_linear<D>(&self, path: Option<&str>) -> Result<D, FetchError>
    where
        D: DeserializeOwned,
    {
        let url = self.resolve_url(path);

        let result = async {
            let response = self.transport.get(url.clone()).await?;
            let response = response.error_for_status()?;
            let payload = response.json::<Value>()?;
            decode::<D>(payload)
        }
        .await;

        match result {
            Ok((payload, data)) => {
                self.log_success(FetchStrategy::Linear, &url, &payload);
                Ok(data)
            }
            Err(err) => {
                self.log_failure(FetchStrategy::Linear, &url, &err);
                Err(err)
            }
        }
    }

    /// Fetch with the given strategy.
    pub async fn fetch_with<D>(&self, strategy: FetchStrategy, path: Option<&str>) -> Result<D, FetchError>
    where
        D: DeserializeOwned,
    {
        match strategy {
            FetchStrategy::Chained => self.fetch_chained(path).await,
            FetchStrategy::Linear => self.fetch_linear(path).await,
        }
    }

    /// Get the logger.
    pub fn logger(&self) -> &StructuredLogger {
        &self.logger
    }

    /// Get the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `payload` is the fetched JSON as received, including fields `D` ignores.
    fn log_success(&self, strategy: FetchStrategy, url: &str, payload: &Value) {
        self.logger
            .info_builder("fetch complete")
            .field("strategy", strategy.label())
            .field("url", url)
            .emit();
        self.logger
            .debug_builder("payload")
            .field("strategy", strategy.label())
            .field_json("payload", payload.clone())
            .emit();
    }

    fn log_failure(&self, strategy: FetchStrategy, url: &str, err: &FetchError) {
        self.logger
            .error_builder("fetch failed")
            .field("strategy", strategy.label())
            .field("url", url)
            .field("error", err.to_string())
            .emit();
    }
}

/// Decode the fetched value into `D`, keeping the value for logging.
fn decode<D: DeserializeOwned>(payload: Value) -> Result<(Value, D), FetchError> {
    let data = D::deserialize(&payload)?;
    Ok((payload, data))
}
