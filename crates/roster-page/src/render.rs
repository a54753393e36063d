//! Whole-document renderer.

use roster_streaming::Element;

use crate::data::{Document, Educator, Learner};
use crate::sections::{
    render_courses, render_examples, render_instructors, render_relationships, render_students,
};

/// Clear `output` and append the five sections for `document`, in order.
///
/// Missing fields show up as `undefined` text; rendering itself cannot fail.
pub fn render_all(document: &Document, output: &mut Element) {
    output.clear();

    let learners: Vec<Learner> = document.students.iter().map(Learner::from).collect();
    let educators: Vec<Educator> = document.instructors.iter().map(Educator::from).collect();

    output.append(render_students(&document.students));
    output.append(render_courses(&document.courses));
    output.append(render_instructors(&document.instructors));
    output.append(render_relationships(document));
    output.append(render_examples(&learners, &educators));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::SECTION_ORDER;

    fn sample() -> Document {
        serde_json::from_str(
            r#"{
                "students": [{"id": 1, "name": "Ana", "age": 23, "course": "AI"}],
                "courses": [{"title": "AI", "description": "Intro to AI"}],
                "instructors": [{"id": 1, "name": "Bo", "subject": "Artificial Intelligence"}]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_five_sections_in_order() {
        let mut output = Element::new("div").with_id("output");
        render_all(&sample(), &mut output);

        let names: Vec<&str> = output
            .children()
            .iter()
            .map(|s| s.attr("data-section").unwrap())
            .collect();
        assert_eq!(names, SECTION_ORDER);
        assert!(output.children().iter().all(|s| s.has_class("section")));
    }

    #[test]
    fn test_previous_content_is_cleared() {
        let mut output = Element::new("div").with_id("output").with_text("Loading...");
        output.append(Element::new("p").with_text("stale"));

        render_all(&sample(), &mut output);
        render_all(&sample(), &mut output);

        assert_eq!(output.text(), None);
        assert_eq!(output.children().len(), 5);
    }

    #[test]
    fn test_sample_lines() {
        let mut output = Element::new("div");
        render_all(&sample(), &mut output);
        let html = output.render();

        assert!(html.contains(r#"<div class="student highlight">Ana (23) - AI *</div>"#));
        assert!(html.contains("<div>Ana → AI → Intro to AI</div>"));
        assert!(html.contains("<div>AI → Taught by John Rey Silverio</div>"));
        assert!(html.contains(
            "<div>Hi, my name is Ana, I am 23 years old, and I am enrolled in AI.</div>"
        ));
        assert!(html.contains("<div>I am Bo and I teach Artificial Intelligence.</div>"));
    }

    #[test]
    fn test_empty_document_still_has_sections() {
        let mut output = Element::new("div");
        render_all(&Document::default(), &mut output);
        assert_eq!(output.children().len(), 5);
        // Relationships keeps both sub-list headings.
        assert_eq!(output.children()[3].children().len(), 3);
    }
}
