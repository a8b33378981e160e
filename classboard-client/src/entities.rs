//! Dashboard collection types.
//!
//! One struct per REST collection, each carrying its endpoint path and the
//! ordered field set used for in-memory filtering. The field sets are per
//! entity type because the same list controller is reused across
//! differently-shaped collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A typed REST collection with a fixed endpoint path.
pub trait Resource {
    /// Endpoint path relative to the backend base URL (e.g. `/exams`).
    const PATH: &'static str;
}

/// An entity that can be filtered in memory.
///
/// Returns the ordered list of fields the client filter matches against.
/// Matching is case-insensitive substring, OR across fields.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

// ============ People ============

/// A student record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Name of the class the student is enrolled in, if assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl Resource for Student {
    const PATH: &'static str = "/students";
}

impl Searchable for Student {
    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.first_name.as_str()),
            Some(self.last_name.as_str()),
            self.email.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// A teacher record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Names of the subjects this teacher covers.
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl Resource for Teacher {
    const PATH: &'static str = "/teachers";
}

impl Searchable for Teacher {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.first_name.as_str(), self.last_name.as_str()];
        if let Some(email) = self.email.as_deref() {
            fields.push(email);
        }
        fields
    }
}

/// A parent/guardian record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Resource for Parent {
    const PATH: &'static str = "/parents";
}

impl Searchable for Parent {
    fn search_fields(&self) -> Vec<&str> {
        [
            Some(self.first_name.as_str()),
            Some(self.last_name.as_str()),
            self.email.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

// ============ Structure ============

/// A class (homeroom group).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassGroup {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<u32>,
    /// Display name of the supervising teacher.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supervisor_name: Option<String>,
}

impl Resource for ClassGroup {
    const PATH: &'static str = "/classes";
}

impl Searchable for ClassGroup {
    fn search_fields(&self) -> Vec<&str> {
        [Some(self.name.as_str()), self.supervisor_name.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// A taught subject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: String,
    pub name: String,
}

impl Resource for Subject {
    const PATH: &'static str = "/subjects";
}

impl Searchable for Subject {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

// ============ Assessment ============

/// A scheduled exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: String,
    pub title: String,
    pub subject_name: String,
    pub teacher_first_name: String,
    pub teacher_last_name: String,
    /// When the exam takes place, if scheduled.
    #[serde(with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<DateTime<Utc>>,
}

impl Resource for Exam {
    const PATH: &'static str = "/exams";
}

impl Searchable for Exam {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.subject_name.as_str(),
            self.teacher_first_name.as_str(),
            self.teacher_last_name.as_str(),
        ]
    }
}

/// A student's score on one exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExamResult {
    pub id: String,
    pub exam_title: String,
    pub student_first_name: String,
    pub student_last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Resource for ExamResult {
    const PATH: &'static str = "/results";
}

impl Searchable for ExamResult {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.exam_title.as_str(),
            self.student_first_name.as_str(),
            self.student_last_name.as_str(),
        ]
    }
}

// ============ Communication ============

/// A calendar event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub end_time: Option<DateTime<Utc>>,
}

impl Resource for Event {
    const PATH: &'static str = "/events";
}

impl Searchable for Event {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

/// A school-wide announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(with = "crate::utils::datetime")]
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub date: Option<DateTime<Utc>>,
}

impl Resource for Announcement {
    const PATH: &'static str = "/announcements";
}

impl Searchable for Announcement {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.description.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exam_deserializes_from_camel_case() {
        let json = r#"{
            "id": "ex-1",
            "title": "Algebra Exam",
            "subjectName": "Mathematics",
            "teacherFirstName": "Ada",
            "teacherLastName": "Byron",
            "date": "2026-06-12T09:00:00Z"
        }"#;
        let exam: Exam = serde_json::from_str(json).unwrap();
        assert_eq!(exam.title, "Algebra Exam");
        assert_eq!(exam.subject_name, "Mathematics");
        assert!(exam.date.is_some());
    }

    #[test]
    fn exam_search_fields_ordered() {
        let exam = Exam {
            id: "ex-1".into(),
            title: "Algebra Exam".into(),
            subject_name: "Mathematics".into(),
            teacher_first_name: "Ada".into(),
            teacher_last_name: "Byron".into(),
            date: None,
        };
        assert_eq!(
            exam.search_fields(),
            vec!["Algebra Exam", "Mathematics", "Ada", "Byron"]
        );
    }

    #[test]
    fn student_search_fields_skip_missing_email() {
        let student = Student {
            id: "s-1".into(),
            first_name: "Grace".into(),
            last_name: "Hopper".into(),
            email: None,
            class_name: Some("5A".into()),
        };
        assert_eq!(student.search_fields(), vec!["Grace", "Hopper"]);
    }

    #[test]
    fn teacher_missing_subjects_defaults_empty() {
        let json = r#"{"id":"t-1","firstName":"Alan","lastName":"Turing"}"#;
        let teacher: Teacher = serde_json::from_str(json).unwrap();
        assert!(teacher.subjects.is_empty());
        assert!(teacher.email.is_none());
    }

    #[test]
    fn resource_paths() {
        assert_eq!(Student::PATH, "/students");
        assert_eq!(Exam::PATH, "/exams");
        assert_eq!(Announcement::PATH, "/announcements");
    }
}
