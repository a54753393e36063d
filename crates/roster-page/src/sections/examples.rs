//! Examples section: sentences from the first learner and educator records.

use roster_streaming::Element;

use super::section;
use crate::data::{Educator, Learner};

/// Number of learner sentences shown.
pub const EXAMPLE_LEARNERS: usize = 3;

/// Number of educator sentences shown.
pub const EXAMPLE_EDUCATORS: usize = 2;

/// Render the examples section.
pub fn render_examples(learners: &[Learner], educators: &[Educator]) -> Element {
    let sentences = learners
        .iter()
        .take(EXAMPLE_LEARNERS)
        .map(Learner::introduce)
        .chain(educators.iter().take(EXAMPLE_EDUCATORS).map(Educator::teach));

    sentences.fold(
        section("examples", "Examples from class instances"),
        |el, sentence| el.with_child(Element::new("div").with_text(sentence)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{InstructorRecord, StudentRecord};

    #[test]
    fn test_limits_and_order() {
        let learners: Vec<Learner> = (0..5)
            .map(|i| {
                Learner::from(&StudentRecord {
                    name: Some(format!("S{}", i)),
                    age: Some(20),
                    course: Some("AI".into()),
                    ..Default::default()
                })
            })
            .collect();
        let educators: Vec<Educator> = (0..3)
            .map(|i| {
                Educator::from(&InstructorRecord {
                    name: Some(format!("T{}", i)),
                    subject: Some("Math".into()),
                    ..Default::default()
                })
            })
            .collect();

        let el = render_examples(&learners, &educators);
        let lines: Vec<String> = el.children()[1..].iter().map(|c| c.text_content()).collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Hi, my name is S0,"));
        assert!(lines[2].starts_with("Hi, my name is S2,"));
        assert_eq!(lines[3], "I am T0 and I teach Math.");
        assert_eq!(lines[4], "I am T1 and I teach Math.");
    }

    #[test]
    fn test_fewer_records_than_limits() {
        let el = render_examples(&[], &[]);
        assert_eq!(el.children().len(), 1);
    }
}
