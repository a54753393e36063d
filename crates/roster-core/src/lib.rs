//! Core abstractions for the student directory page.
//!
//! This crate provides the fundamental types:
//! - `PageConfig` - Data path, container id and fallback text
//! - `RequestContext` - Typed request parameters
//! - `TimingContext` / `LifecyclePhase` - Request lifecycle tracking
//! - `PageError` - Streaming protocol failures

mod config;
mod context;
mod error;
mod lifecycle;

pub use config::*;
pub use context::*;
pub use error::*;
pub use lifecycle::*;
