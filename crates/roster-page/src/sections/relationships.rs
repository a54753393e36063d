//! Cross-reference section: student → course and course → instructor.

use roster_streaming::Element;

use super::section;
use crate::data::{CourseRecord, Document, InstructorRecord, StudentRecord};

/// Title keywords checked in order when no instructor subject matches.
pub const KEYWORD_FALLBACKS: [(&str, &str); 2] =
    [("data", "Maria Santos"), ("cyber", "Carlos Dela Cruz")];

/// Instructor used when no subject or keyword matches.
pub const DEFAULT_INSTRUCTOR: &str = "John Rey Silverio";

/// Suffix for a student whose course has no entry.
pub const NO_DESCRIPTION: &str = "(no description found)";

/// How an instructor was assigned to a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentSource {
    /// An instructor's subject contains the course title.
    SubjectMatch,
    /// The course title contains this keyword.
    Keyword(&'static str),
    /// Nothing matched.
    Default,
}

/// Instructor assigned to one course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructorAssignment {
    pub name: String,
    pub source: AssignmentSource,
}

impl InstructorAssignment {
    /// Whether the name came from the keyword table or the default.
    pub fn is_fallback(&self) -> bool {
        self.source != AssignmentSource::SubjectMatch
    }
}

/// The course whose title exactly equals the student's course.
pub fn find_course<'a>(
    student: &StudentRecord,
    courses: &'a [CourseRecord],
) -> Option<&'a CourseRecord> {
    let wanted = student.course.as_deref()?;
    courses.iter().find(|c| c.title.as_deref() == Some(wanted))
}

/// First instructor whose subject contains the course title, case-insensitively,
/// else the keyword fallback for the title.
///
/// A matching instructor without a name counts as no match.
pub fn resolve_instructor(
    course: &CourseRecord,
    instructors: &[InstructorRecord],
) -> InstructorAssignment {
    let Some(title) = course.title.as_deref().map(str::to_lowercase) else {
        return InstructorAssignment {
            name: DEFAULT_INSTRUCTOR.to_string(),
            source: AssignmentSource::Default,
        };
    };

    let found = instructors
        .iter()
        .find(|i| {
            i.subject
                .as_deref()
                .is_some_and(|subject| subject.to_lowercase().contains(&title))
        })
        .and_then(|i| i.name.as_deref())
        .filter(|name| !name.is_empty());
    if let Some(name) = found {
        return InstructorAssignment {
            name: name.to_string(),
            source: AssignmentSource::SubjectMatch,
        };
    }

    match KEYWORD_FALLBACKS
        .iter()
        .find(|(keyword, _)| title.contains(keyword))
    {
        Some((keyword, name)) => InstructorAssignment {
            name: name.to_string(),
            source: AssignmentSource::Keyword(*keyword),
        },
        None => InstructorAssignment {
            name: DEFAULT_INSTRUCTOR.to_string(),
            source: AssignmentSource::Default,
        },
    }
}

/// `{student} → {course} → {description}`, or the no-description form.
pub fn student_course_line(student: &StudentRecord, courses: &[CourseRecord]) -> String {
    match find_course(student, courses) {
        Some(course) => format!(
            "{} → {} → {}",
            student.name_text(),
            course.title_text(),
            course.description_text()
        ),
        None => format!(
            "{} → {} → {}",
            student.name_text(),
            student.course_text(),
            NO_DESCRIPTION
        ),
    }
}

/// `{course} → Taught by {instructor}`
pub fn course_instructor_line(course: &CourseRecord, instructors: &[InstructorRecord]) -> String {
    format!(
        "{} → Taught by {}",
        course.title_text(),
        resolve_instructor(course, instructors).name
    )
}

/// Render the relationships section with its two sub-lists.
pub fn render_relationships(document: &Document) -> Element {
    let student_courses = document.students.iter().fold(
        Element::new("div")
            .with_child(Element::new("h4").with_text("Student → Course → Course Description")),
        |el, student| {
            el.with_child(
                Element::new("div").with_text(student_course_line(student, &document.courses)),
            )
        },
    );

    let course_instructors = document.courses.iter().fold(
        Element::new("div").with_child(Element::new("h4").with_text("Course → Instructor")),
        |el, course| {
            el.with_child(
                Element::new("div")
                    .with_text(course_instructor_line(course, &document.instructors)),
            )
        },
    );

    section("relationships", "Data Relationships:")
        .with_child(student_courses)
        .with_child(course_instructors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(title: &str, description: &str) -> CourseRecord {
        CourseRecord {
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }

    fn instructor(name: &str, subject: &str) -> InstructorRecord {
        InstructorRecord {
            id: None,
            name: Some(name.into()),
            subject: Some(subject.into()),
        }
    }

    fn student(name: &str, course: &str) -> StudentRecord {
        StudentRecord {
            name: Some(name.into()),
            age: Some(20),
            course: Some(course.into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_exact_course_match() {
        let courses = [course("AI", "Intro to AI"), course("Web", "HTML and CSS")];
        assert_eq!(
            student_course_line(&student("Ana", "AI"), &courses),
            "Ana → AI → Intro to AI"
        );
        // Exact, case-sensitive equality.
        assert_eq!(
            student_course_line(&student("Ben", "ai"), &courses),
            "Ben → ai → (no description found)"
        );
    }

    #[test]
    fn test_missing_course_field_has_no_match() {
        let courses = [CourseRecord::default()];
        let student = StudentRecord {
            name: Some("Cy".into()),
            ..Default::default()
        };
        assert!(find_course(&student, &courses).is_none());
        assert_eq!(
            student_course_line(&student, &courses),
            "Cy → undefined → (no description found)"
        );
    }

    #[test]
    fn test_subject_contains_title_case_insensitive() {
        let instructors = [
            instructor("Bo", "Artificial Intelligence"),
            instructor("Lee", "Advanced WEB Development"),
            instructor("Max", "Web Design"),
        ];
        let assignment = resolve_instructor(&course("Web", ""), &instructors);
        assert_eq!(assignment.name, "Lee");
        assert_eq!(assignment.source, AssignmentSource::SubjectMatch);
        assert!(!assignment.is_fallback());
    }

    #[test]
    fn test_keyword_fallbacks() {
        let instructors = [instructor("Bo", "Artificial Intelligence")];

        let data = resolve_instructor(&course("Intro to Data Analytics", ""), &instructors);
        assert_eq!(data.name, "Maria Santos");
        assert_eq!(data.source, AssignmentSource::Keyword("data"));

        let cyber = resolve_instructor(&course("CyberSecurity Basics", ""), &instructors);
        assert_eq!(cyber.name, "Carlos Dela Cruz");

        let both = resolve_instructor(&course("Cyber Data Forensics", ""), &instructors);
        assert_eq!(both.name, "Maria Santos");

        let other = resolve_instructor(&course("Mobile Apps", ""), &instructors);
        assert_eq!(other.name, DEFAULT_INSTRUCTOR);
        assert_eq!(other.source, AssignmentSource::Default);
    }

    #[test]
    fn test_short_title_is_not_broadened() {
        // "artificial intelligence" does not contain "ai".
        let instructors = [instructor("Bo", "Artificial Intelligence")];
        assert_eq!(
            course_instructor_line(&course("AI", "Intro to AI"), &instructors),
            "AI → Taught by John Rey Silverio"
        );
    }

    #[test]
    fn test_missing_subject_and_title() {
        let instructors = [InstructorRecord {
            name: Some("Nobody".into()),
            ..Default::default()
        }];
        assert_eq!(
            resolve_instructor(&course("Data Mining", ""), &instructors).name,
            "Maria Santos"
        );
        assert_eq!(
            course_instructor_line(&CourseRecord::default(), &instructors),
            "undefined → Taught by John Rey Silverio"
        );
    }

    #[test]
    fn test_unnamed_subject_match_uses_fallback() {
        let unnamed = InstructorRecord {
            subject: Some("Intro Data Science".into()),
            ..Default::default()
        };
        let assignment = resolve_instructor(&course("Data Science", ""), &[unnamed]);
        assert_eq!(assignment.name, "Maria Santos");
        assert_eq!(assignment.source, AssignmentSource::Keyword("data"));

        // Only the first subject match is considered.
        let blank = [
            instructor("", "Intro Data Science"),
            instructor("Lee", "Data Science Lab"),
        ];
        let assignment = resolve_instructor(&course("Data Science", ""), &blank);
        assert_eq!(assignment.name, "Maria Santos");
        assert!(assignment.is_fallback());

        assert_eq!(
            course_instructor_line(&course("Mobile Apps", ""), &[instructor("", "Mobile Apps")]),
            "Mobile Apps → Taught by John Rey Silverio"
        );
    }

    #[test]
    fn test_render_structure() {
        let doc = Document {
            students: vec![student("Ana", "AI")],
            courses: vec![course("AI", "Intro to AI")],
            instructors: vec![instructor("Bo", "Artificial Intelligence")],
        };
        let el = render_relationships(&doc);
        let lists = &el.children()[1..];
        assert_eq!(lists.len(), 2);
        assert_eq!(lists[0].children()[0].text(), Some("Student → Course → Course Description"));
        assert_eq!(lists[0].children()[1].text(), Some("Ana → AI → Intro to AI"));
        assert_eq!(lists[1].children()[0].text(), Some("Course → Instructor"));
        assert_eq!(lists[1].children()[1].text(), Some("AI → Taught by John Rey Silverio"));
    }
}
