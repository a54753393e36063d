//! Instructors section renderer.

use roster_streaming::Element;

use super::section;
use crate::data::InstructorRecord;

/// `{name} - {subject}`
pub fn instructor_line(instructor: &InstructorRecord) -> String {
    format!("{} - {}", instructor.name_text(), instructor.subject_text())
}

/// Render the instructors section.
pub fn render_instructors(instructors: &[InstructorRecord]) -> Element {
    instructors
        .iter()
        .fold(section("instructors", "Instructors:"), |el, instructor| {
            el.with_child(
                Element::new("div")
                    .with_text(instructor_line(instructor))
                    .with_class("instructor"),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instructor_line_with_missing_subject() {
        let instructor = InstructorRecord {
            name: Some("Bo".into()),
            ..Default::default()
        };
        assert_eq!(instructor_line(&instructor), "Bo - undefined");

        let el = render_instructors(&[instructor]);
        assert_eq!(el.attr("data-section"), Some("instructors"));
        assert!(el.children()[1].has_class("instructor"));
    }
}
