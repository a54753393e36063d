//! Roster document fetching.
//!
//! This crate provides:
//! - `FetchClient` - GET + JSON decode, as a combinator chain or a linear `async` body
//! - `Transport` - Seam over the outbound request (file, HTTP, Spin, mock)
//! - `RawResponse` - Status, headers and body of one response
//! - `FetchError` - Failures shared by both strategies

mod client;
mod error;
mod response;
mod transport;

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(not(target_arch = "wasm32"))]
mod http;
#[cfg(target_arch = "wasm32")]
mod spin;

pub use client::*;
pub use error::*;
pub use response::*;
pub use transport::*;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpTransport;
#[cfg(target_arch = "wasm32")]
pub use spin::SpinTransport;
