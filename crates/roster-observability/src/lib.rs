//! Observability for the student directory.
//!
//! This crate provides:
//! - `StructuredLogger` - Structured logging with request context
//! - `LogCapture` - In-memory log sink for tests and diagnostics

mod logging;

pub use logging::*;

// Re-export RequestId from roster-core for convenience
pub use roster_core::RequestId;
