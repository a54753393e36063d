//! Roster document and the record types built from it.

mod people;
mod records;

pub use people::*;
pub use records::*;
