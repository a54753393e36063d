//! Render tree and shell-first streaming.
//!
//! - `Element` - Render-tree node; the page's output container is one
//! - `Shell` - Document wrapper around the streamed sections
//! - `StreamingSink` - Enforces shell-first writes over any byte sink

mod element;
mod shell;
mod sink;

pub use element::*;
pub use shell::*;
pub use sink::*;
