//! Section renderers for the student directory.

mod courses;
mod examples;
mod instructors;
mod relationships;
mod students;

pub use courses::*;
pub use examples::*;
pub use instructors::*;
pub use relationships::*;
pub use students::*;

use roster_streaming::Element;

/// Section names in render order; each is the `data-section` attribute.
pub const SECTION_ORDER: [&str; 5] = [
    "students",
    "courses",
    "instructors",
    "relationships",
    "examples",
];

/// Empty `div.section` with its heading.
pub(crate) fn section(name: &str, heading: &str) -> Element {
    Element::new("div")
        .with_class("section")
        .with_attr("data-section", name)
        .with_child(Element::new("h3").with_text(heading))
}
