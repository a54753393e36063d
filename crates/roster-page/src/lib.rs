//! Student directory page.
//!
//! Renders a roster document (students, courses, instructors) into five
//! sections inside the `#output` container:
//! - students, with a highlight for those over 21
//! - courses and instructors
//! - student → course and course → instructor cross-references
//! - sentences from the first learner and educator records
//!
//! `StudentDirectoryPage` ties this to a `FetchClient` and a streaming sink.

pub mod data;
mod page;
mod render;
pub mod sections;
mod styles;

pub use page::*;
pub use render::*;
pub use styles::PAGE_STYLES;
