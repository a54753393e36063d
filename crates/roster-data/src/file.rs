//! Local filesystem transport.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;

use crate::{FetchError, RawResponse, Transport};

/// Serves paths from a root directory, answering like a static file server.
///
/// Missing files are 404; paths escaping the root are 403.
#[derive(Debug, Clone)]
pub struct FileTransport {
    root: PathBuf,
}

impl FileTransport {
    /// Create a transport rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, url: &str) -> Option<PathBuf> {
        let relative = Path::new(url.trim_start_matches('/'));
        if relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return None;
        }
        Some(self.root.join(relative))
    }
}

#[async_trait(?Send)]
impl Transport for FileTransport {
    async fn get(&self, url: String) -> Result<RawResponse, FetchError> {
        let Some(path) = self.resolve(&url) else {
            return Ok(RawResponse::new(403, HashMap::new(), Vec::new()));
        };

        match tokio::fs::read(&path).await {
            Ok(body) => {
                let mut headers = HashMap::new();
                if path.extension().is_some_and(|ext| ext == "json") {
                    headers.insert("content-type".to_string(), "application/json".to_string());
                }
                headers.insert("content-length".to_string(), body.len().to_string());
                Ok(RawResponse::new(200, headers, body))
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(RawResponse::new(404, HashMap::new(), Vec::new()))
            }
            Err(e) => Err(FetchError::Connection(format!("{}: {}", path.display(), e))),
        }
    }
}
