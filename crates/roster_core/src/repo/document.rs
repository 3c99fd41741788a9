//! Persisted roster document and file helpers.
//!
//! # Responsibility
//! - Define the on-disk JSON shape (three top-level arrays).
//! - Read and write the whole document in one pass.
//!
//! # Invariants
//! - Records are flat objects; the variant is implied by the enclosing array.
//! - Writes replace the file wholesale and are not crash-atomic.

use crate::model::member::{NonTeachingStaff, Student, Teacher};
use crate::repo::member_repo::{RepoError, RepoResult};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

const INDENT: &[u8] = b"    ";

/// Owned document decoded from disk.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RosterDocument {
    #[serde(rename = "Students", default)]
    pub students: Vec<Student>,
    #[serde(rename = "Teachers", default)]
    pub teachers: Vec<Teacher>,
    #[serde(rename = "NonTeachingStaffs", default)]
    pub non_teaching_staffs: Vec<NonTeachingStaff>,
}

/// Borrowed view used for saving without cloning collections.
#[derive(Debug, Serialize)]
pub struct RosterDocumentView<'a> {
    #[serde(rename = "Students")]
    pub students: &'a [Student],
    #[serde(rename = "Teachers")]
    pub teachers: &'a [Teacher],
    #[serde(rename = "NonTeachingStaffs")]
    pub non_teaching_staffs: &'a [NonTeachingStaff],
}

/// Result of reading the document file.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(RosterDocument),
    /// File does not exist.
    Missing,
    /// File exists but is not a valid roster document.
    Malformed(serde_json::Error),
}

/// Reads and decodes the document at `path`.
///
/// # Errors
/// - Returns `RepoError::Io` for read failures other than a missing file.
pub fn read_document(path: &Path) -> RepoResult<LoadOutcome> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(LoadOutcome::Missing),
        Err(err) => return Err(RepoError::io(path, err)),
    };

    Ok(decode_document(&bytes))
}

/// Decodes raw file bytes into a document.
pub fn decode_document(bytes: &[u8]) -> LoadOutcome {
    match serde_json::from_slice::<RosterDocument>(bytes) {
        Ok(document) => LoadOutcome::Loaded(document),
        Err(err) => LoadOutcome::Malformed(err),
    }
}

/// Encodes the document as pretty JSON with 4-space indentation.
pub fn encode_document(view: &RosterDocumentView<'_>) -> RepoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    view.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Overwrites the file at `path` with the encoded document.
pub fn write_document(path: &Path, view: &RosterDocumentView<'_>) -> RepoResult<()> {
    let bytes = encode_document(view)?;
    std::fs::write(path, bytes).map_err(|err| RepoError::io(path, err))
}

#[cfg(test)]
mod tests {
    use super::{decode_document, encode_document, LoadOutcome, RosterDocumentView};
    use crate::model::member::{create_student, create_teacher};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn absent_top_level_keys_default_to_empty() {
        let outcome = decode_document(br#"{"Teachers": []}"#);
        let LoadOutcome::Loaded(document) = outcome else {
            panic!("partial document should decode");
        };
        assert!(document.students.is_empty());
        assert!(document.teachers.is_empty());
        assert!(document.non_teaching_staffs.is_empty());
    }

    #[test]
    fn non_object_and_garbage_are_malformed() {
        assert!(matches!(decode_document(b"[]"), LoadOutcome::Malformed(_)));
        assert!(matches!(decode_document(b"{not json"), LoadOutcome::Malformed(_)));
        assert!(matches!(decode_document(b""), LoadOutcome::Malformed(_)));
    }

    #[test]
    fn record_missing_required_field_is_malformed() {
        let bytes = br#"{"Students": [{"name": "Asha", "dob": "2010-05-01"}]}"#;
        let outcome = decode_document(bytes);
        assert!(matches!(outcome, LoadOutcome::Malformed(_)));
    }

    #[test]
    fn encode_uses_four_space_indent_and_flat_records() {
        let asha = create_student("Asha", date(2010, 5, 1), "S100", "5th");
        let ravi = create_teacher("Ravi", date(1980, 1, 2), "T1", "Math", 50000.0);
        let students = vec![asha];
        let teachers = vec![ravi];
        let view = RosterDocumentView {
            students: &students,
            teachers: &teachers,
            non_teaching_staffs: &[],
        };

        let bytes = encode_document(&view).expect("document should encode");
        let text = String::from_utf8(bytes).expect("utf-8 output");
        assert!(text.starts_with("{\n    \"Students\": ["));
        assert!(text.contains("\"dob\": \"2010-05-01\""));
        assert!(text.contains("\"contact\": null"));
        assert!(!text.contains("person"));
        assert!(text.contains("\"NonTeachingStaffs\": []"));
    }
}
