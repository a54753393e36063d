//! Courses section renderer.

use roster_streaming::Element;

use super::section;
use crate::data::CourseRecord;

/// `{title}: {description}`
pub fn course_line(course: &CourseRecord) -> String {
    format!("{}: {}", course.title_text(), course.description_text())
}

/// Render the courses section.
pub fn render_courses(courses: &[CourseRecord]) -> Element {
    courses.iter().fold(section("courses", "Courses:"), |el, course| {
        el.with_child(Element::new("div").with_text(course_line(course)).with_class("course"))
    })
}
