//! Students section renderer.

use roster_streaming::Element;

use super::section;
use crate::data::StudentRecord;

/// Students strictly older than this are highlighted.
pub const HIGHLIGHT_AGE: i64 = 21;

/// Whether a student gets the highlight marker. Unknown age never does.
pub fn is_highlighted(student: &StudentRecord) -> bool {
    student.age.is_some_and(|age| age > HIGHLIGHT_AGE)
}

/// `{name} ({age}) - {course}`, with ` *` appended when highlighted.
pub fn student_line(student: &StudentRecord) -> String {
    format!(
        "{} ({}) - {}{}",
        student.name_text(),
        student.age_text(),
        student.course_text(),
        if is_highlighted(student) { " *" } else { "" }
    )
}

/// Render the students section.
pub fn render_students(students: &[StudentRecord]) -> Element {
    students.iter().fold(section("students", "Students:"), |el, student| {
        let class = if is_highlighted(student) {
            "student highlight"
        } else {
            "student"
        };
        el.with_child(Element::new("div").with_text(student_line(student)).with_class(class))
    })
}
