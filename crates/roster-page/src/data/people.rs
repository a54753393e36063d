//! Learner and educator records with their descriptive sentences.

use crate::data::{field_text, number_text, InstructorRecord, RecordId, StudentRecord};

/// A student, built from a roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Learner {
    id: Option<RecordId>,
    name: Option<String>,
    age: Option<i64>,
    course: Option<String>,
}

impl Learner {
    /// Build from named fields. Never fails; absent fields stay absent.
    pub fn from_record(record: &StudentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            age: record.age,
            course: record.course.clone(),
        }
    }

    pub fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn age(&self) -> Option<i64> {
        self.age
    }

    pub fn course(&self) -> Option<&str> {
        self.course.as_deref()
    }

    /// Self-introduction sentence.
    pub fn introduce(&self) -> String {
        format!(
            "Hi, my name is {}, I am {} years old, and I am enrolled in {}.",
            field_text(self.name()),
            number_text(self.age),
            field_text(self.course())
        )
    }
}

impl From<&StudentRecord> for Learner {
    fn from(record: &StudentRecord) -> Self {
        Self::from_record(record)
    }
}

/// An instructor, built from a roster entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Educator {
    id: Option<RecordId>,
    name: Option<String>,
    subject: Option<String>,
}

impl Educator {
    /// Build from named fields. Never fails; absent fields stay absent.
    pub fn from_record(record: &InstructorRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            subject: record.subject.clone(),
        }
    }

    pub fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Teaching sentence.
    pub fn teach(&self) -> String {
        format!(
            "I am {} and I teach {}.",
            field_text(self.name()),
            field_text(self.subject())
        )
    }
}

impl From<&InstructorRecord> for Educator {
    fn from(record: &InstructorRecord) -> Self {
        Self::from_record(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_introduce() {
        let learner = Learner::from(&StudentRecord {
            id: Some(RecordId::Number(1)),
            name: Some("Ana".into()),
            age: Some(23),
            course: Some("AI".into()),
        });
        assert_eq!(
            learner.introduce(),
            "Hi, my name is Ana, I am 23 years old, and I am enrolled in AI."
        );
        assert_eq!(learner.id(), Some(&RecordId::Number(1)));
    }

    #[test]
    fn test_introduce_with_missing_fields() {
        let learner = Learner::from(&StudentRecord {
            name: Some("Cy".into()),
            ..Default::default()
        });
        assert_eq!(
            learner.introduce(),
            "Hi, my name is Cy, I am undefined years old, and I am enrolled in undefined."
        );
    }

    #[test]
    fn test_teach() {
        let educator = Educator::from(&InstructorRecord {
            id: None,
            name: Some("Bo".into()),
            subject: Some("Artificial Intelligence".into()),
        });
        assert_eq!(educator.teach(), "I am Bo and I teach Artificial Intelligence.");

        let blank = Educator::from(&InstructorRecord::default());
        assert_eq!(blank.teach(), "I am undefined and I teach undefined.");
    }
}
