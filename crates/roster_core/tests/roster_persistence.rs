use chrono::NaiveDate;
use roster_core::{
    create_non_teaching_staff, create_student, create_teacher, DataManager, NonTeachingStaff,
    RepoError, Student, Teacher,
};
use serde_json::Value;
use std::fs;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn asha() -> Student {
    create_student("Asha", date(2010, 5, 1), "S100", "5th")
}

fn ravi() -> Teacher {
    create_teacher("Ravi", date(1980, 1, 2), "T1", "Math", 50000.0)
}

fn mo() -> NonTeachingStaff {
    create_non_teaching_staff("Mo", date(1975, 3, 9), "E7", "Librarian", 30000.0)
}

#[test]
fn missing_file_starts_empty_without_creating_it() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    let manager = DataManager::open(&path).unwrap();

    assert!(manager.is_empty());
    assert_eq!(manager.file_path(), path.as_path());
    assert!(!path.exists());
}

#[test]
fn malformed_json_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{\"Students\": [").unwrap();

    let manager = DataManager::open(&path).unwrap();
    assert!(manager.is_empty());
}

#[test]
fn empty_arrays_document_loads_three_empty_collections() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    let text = r#"{"Students":[],"Teachers":[],"NonTeachingStaffs":[]}"#;
    fs::write(&path, text).unwrap();

    let manager = DataManager::open(&path).unwrap();
    assert!(manager.students().is_empty());
    assert!(manager.teachers().is_empty());
    assert!(manager.non_teaching_staffs().is_empty());
}

#[test]
fn directory_path_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();

    let err = DataManager::open(dir.path()).unwrap_err();
    assert!(matches!(err, RepoError::Io { .. }));
}

#[test]
fn added_student_is_visible_to_a_new_instance() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    let mut first = DataManager::open(&path).unwrap();
    first.add(asha()).unwrap();
    drop(first);

    let second = DataManager::open(&path).unwrap();
    assert_eq!(second.students().len(), 1);
    assert_eq!(second.students()[0].admit_id, "S100");
}

#[test]
fn save_then_load_round_trips_every_field_including_dob() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    let ben = create_student("Ben", date(2011, 2, 28), "S101", "4th");
    let mut teacher = ravi();
    teacher.salary = 50000.25;
    let students = vec![asha().with_contact("asha@example.com"), ben];
    let teachers = vec![teacher];
    let staff = vec![mo()];

    let mut manager = DataManager::open(&path).unwrap();
    for student in &students {
        manager.add(student.clone()).unwrap();
    }
    for teacher in &teachers {
        manager.add(teacher.clone()).unwrap();
    }
    for member in &staff {
        manager.add(member.clone()).unwrap();
    }

    let reopened = DataManager::open(&path).unwrap();
    assert_eq!(reopened.students(), students.as_slice());
    assert_eq!(reopened.teachers(), teachers.as_slice());
    assert_eq!(reopened.non_teaching_staffs(), staff.as_slice());
    assert_eq!(reopened.students()[1].person.dob, date(2011, 2, 28));
}

#[test]
fn non_finite_salary_is_rejected_before_it_reaches_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    let mut manager = DataManager::open(&path).unwrap();
    manager.add(asha()).unwrap();
    manager.add(ravi()).unwrap();
    let bytes_before = fs::read(&path).unwrap();

    let mut unbounded = ravi();
    unbounded.employee_id = "T2".to_string();
    unbounded.salary = f64::INFINITY;
    let err = manager.add(unbounded).unwrap_err();
    assert!(matches!(err, RepoError::InvalidArgument(_)));

    let mut undefined = mo();
    undefined.salary = f64::NAN;
    let err = manager.add(undefined).unwrap_err();
    assert!(matches!(err, RepoError::InvalidArgument(_)));

    let mut raised = ravi();
    raised.salary = f64::NEG_INFINITY;
    let err = manager.update("T1", raised).unwrap_err();
    assert!(matches!(err, RepoError::InvalidArgument(_)));

    assert_eq!(manager.len(), 2);
    assert_eq!(manager.teachers()[0].salary, 50000.0);
    assert_eq!(fs::read(&path).unwrap(), bytes_before);

    let reopened = DataManager::open(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.teachers(), &[ravi()]);
}

#[test]
fn persisted_document_has_exact_flat_field_sets() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    let mut manager = DataManager::open(&path).unwrap();
    manager.add(asha()).unwrap();
    manager.add(ravi()).unwrap();
    manager.add(mo()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n    \"Students\""));
    let document: Value = serde_json::from_str(&text).unwrap();

    let top: Vec<&String> = document.as_object().unwrap().keys().collect();
    assert_eq!(top.len(), 3);

    let keys = |value: &Value| {
        let object = value.as_object().unwrap();
        let mut keys: Vec<String> = object.keys().cloned().collect();
        keys.sort();
        keys
    };
    assert_eq!(
        keys(&document["Students"][0]),
        vec!["admit_id", "contact", "dob", "grade", "name"]
    );
    assert_eq!(
        keys(&document["Teachers"][0]),
        vec!["contact", "dob", "employee_id", "name", "salary", "subject"]
    );
    assert_eq!(
        keys(&document["NonTeachingStaffs"][0]),
        vec!["contact", "dob", "employee_id", "name", "role", "salary"]
    );
    assert_eq!(document["Students"][0]["dob"], "2010-05-01");
    assert_eq!(document["Students"][0]["contact"], Value::Null);
    assert_eq!(document["Teachers"][0]["salary"], 50000.0);
}

#[test]
fn remove_is_written_through_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    let mut manager = DataManager::open(&path).unwrap();
    manager.add(ravi()).unwrap();
    assert!(manager.remove("T1").unwrap());

    let reopened = DataManager::open(&path).unwrap();
    assert!(reopened.teachers().is_empty());
}

#[test]
fn reload_picks_up_external_changes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    let mut manager = DataManager::open(&path).unwrap();
    manager.add(asha()).unwrap();

    let mut other = DataManager::open(&path).unwrap();
    other
        .add(create_student("Ben", date(2011, 1, 1), "S101", "4th"))
        .unwrap();

    assert_eq!(manager.students().len(), 1);
    manager.reload().unwrap();
    assert_eq!(manager.students().len(), 2);
}

#[test]
fn reload_of_corrupted_file_resets_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");

    let mut manager = DataManager::open(&path).unwrap();
    manager.add(asha()).unwrap();
    fs::write(&path, "not json").unwrap();

    manager.reload().unwrap();
    assert!(manager.is_empty());
}

#[test]
fn records_with_missing_fields_make_the_document_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.json");
    let text = r#"{"Students":[{"name":"Asha","dob":"2010-05-01","admit_id":"S100"}]}"#;
    fs::write(&path, text).unwrap();

    let manager = DataManager::open(&path).unwrap();
    assert!(manager.is_empty());
}

#[test]
fn save_to_missing_directory_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("roster.json");

    let mut manager = DataManager::open(&path).unwrap();
    let err = manager.add(asha()).unwrap_err();

    assert!(matches!(err, RepoError::Io { .. }));
    assert_eq!(manager.students().len(), 1);
}
