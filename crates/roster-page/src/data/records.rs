//! Raw records as they appear in the roster document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Text rendered in place of an absent field.
pub const MISSING_FIELD: &str = "undefined";

/// Record identifier; documents use numbers or strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// A student entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<i64>,
    /// Title of the course the student is enrolled in.
    #[serde(default)]
    pub course: Option<String>,
}

/// A course entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// An instructor entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
}

/// The fetched roster document.
///
/// All three lists are required; a document missing one does not parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub students: Vec<StudentRecord>,
    pub courses: Vec<CourseRecord>,
    pub instructors: Vec<InstructorRecord>,
}

/// Field text, or the missing marker.
pub fn field_text(value: Option<&str>) -> &str {
    value.unwrap_or(MISSING_FIELD)
}

/// Numeric field text, or the missing marker.
pub fn number_text(value: Option<i64>) -> String {
    value
        .map(|n| n.to_string())
        .unwrap_or_else(|| MISSING_FIELD.to_string())
}

impl StudentRecord {
    pub fn name_text(&self) -> &str {
        field_text(self.name.as_deref())
    }

    pub fn age_text(&self) -> String {
        number_text(self.age)
    }

    pub fn course_text(&self) -> &str {
        field_text(self.course.as_deref())
    }
}

impl CourseRecord {
    pub fn title_text(&self) -> &str {
        field_text(self.title.as_deref())
    }

    pub fn description_text(&self) -> &str {
        field_text(self.description.as_deref())
    }
}

impl InstructorRecord {
    pub fn name_text(&self) -> &str {
        field_text(self.name.as_deref())
    }

    pub fn subject_text(&self) -> &str {
        field_text(self.subject.as_deref())
    }
}
