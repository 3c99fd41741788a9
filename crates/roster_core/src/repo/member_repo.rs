//! Member repository contract and JSON-file implementation.
//!
//! # Responsibility
//! - Own the three typed member collections and their backing file.
//! - Provide add/update/remove/lookup by identifying key.
//!
//! # Invariants
//! - Scan order is Students, then Teachers, then NonTeachingStaffs, each in
//!   insertion order. The first match wins, so an id shared across
//!   collections shadows the later records.
//! - Every successful mutation rewrites the whole file before returning.
//! - Misses and rejected updates never touch the file.

use crate::model::member::{Member, MemberKind, MemberRecord, NonTeachingStaff, Student, Teacher};
use crate::repo::document::{
    read_document, write_document, LoadOutcome, RosterDocument, RosterDocumentView,
};
use log::{error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for member persistence operations.
#[derive(Debug)]
pub enum RepoError {
    /// Caller supplied a record that cannot be applied, e.g. a replacement
    /// of a different variant than the record it targets.
    InvalidArgument(String),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialize(serde_json::Error),
}

impl RepoError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::Io { path, source } => write!(f, "i/o error on `{}`: {source}", path.display()),
            Self::Serialize(err) => write!(f, "failed to encode roster document: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidArgument(_) => None,
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Repository interface for member CRUD operations.
pub trait MemberRepository {
    fn add_member(&mut self, member: Member) -> RepoResult<()>;
    fn update_member(&mut self, person_id: &str, member: Member) -> RepoResult<bool>;
    fn remove_member(&mut self, person_id: &str) -> RepoResult<bool>;
    fn find_member(&self, person_id: &str) -> RepoResult<Option<Member>>;
    /// Lists members in scan order, optionally restricted to one variant.
    fn list_members(&self, kind: Option<MemberKind>) -> RepoResult<Vec<Member>>;
}

/// Position of a record inside one of the three collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Student(usize),
    Teacher(usize),
    NonTeachingStaff(usize),
}

impl Slot {
    fn kind(self) -> MemberKind {
        match self {
            Self::Student(_) => MemberKind::Student,
            Self::Teacher(_) => MemberKind::Teacher,
            Self::NonTeachingStaff(_) => MemberKind::NonTeachingStaff,
        }
    }
}

/// Write-through member store backed by one JSON file.
///
/// The in-memory collections are the only cache; they are flushed to disk
/// after every mutation. No locking is performed, so concurrent processes
/// sharing a file race with last-writer-wins.
#[derive(Debug)]
pub struct DataManager {
    file_path: PathBuf,
    students: Vec<Student>,
    teachers: Vec<Teacher>,
    non_teaching_staffs: Vec<NonTeachingStaff>,
}

impl DataManager {
    /// Creates a manager for `file_path` and loads any existing state.
    ///
    /// A missing file or malformed JSON starts empty.
    ///
    /// # Errors
    /// - Returns `RepoError::Io` when the file exists but cannot be read.
    pub fn open(file_path: impl Into<PathBuf>) -> RepoResult<Self> {
        let mut manager = Self {
            file_path: file_path.into(),
            students: Vec::new(),
            teachers: Vec::new(),
            non_teaching_staffs: Vec::new(),
        };
        manager.load()?;
        Ok(manager)
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn teachers(&self) -> &[Teacher] {
        &self.teachers
    }

    pub fn non_teaching_staffs(&self) -> &[NonTeachingStaff] {
        &self.non_teaching_staffs
    }

    /// All records in scan order.
    pub fn members(&self) -> Vec<Member> {
        self.students
            .iter()
            .cloned()
            .map(Member::from)
            .chain(self.teachers.iter().cloned().map(Member::from))
            .chain(self.non_teaching_staffs.iter().cloned().map(Member::from))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.students.len() + self.teachers.len() + self.non_teaching_staffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Appends `member` to the collection of its variant and saves.
    ///
    /// No duplicate-id check is performed.
    ///
    /// # Errors
    /// - `RepoError::InvalidArgument` for a non-finite salary; nothing is
    ///   changed.
    /// - Save errors after the record was appended.
    pub fn add(&mut self, member: impl Into<Member>) -> RepoResult<()> {
        let member = member.into();
        ensure_storable(&member)?;
        let kind = member.kind();
        info!(
            "event=member_add module=repo status=start kind={} member_id={}",
            kind,
            member.member_id()
        );

        match member {
            Member::Student(student) => self.students.push(student),
            Member::Teacher(teacher) => self.teachers.push(teacher),
            Member::NonTeachingStaff(staff) => self.non_teaching_staffs.push(staff),
        }
        self.save()
    }

    /// Replaces the first record whose identifying key equals `person_id`.
    ///
    /// The replacement may carry a different id. Returns `Ok(false)` when no
    /// record matches.
    ///
    /// # Errors
    /// - `RepoError::InvalidArgument` when `updated` is a different variant
    ///   than the matched record, or carries a non-finite salary; nothing is
    ///   changed.
    /// - Save errors after the slot was replaced.
    pub fn update(&mut self, person_id: &str, updated: impl Into<Member>) -> RepoResult<bool> {
        let updated = updated.into();
        let Some(slot) = self.locate(person_id) else {
            info!("event=member_update module=repo status=miss member_id={person_id}");
            return Ok(false);
        };
        ensure_storable(&updated)?;

        match (slot, updated) {
            (Slot::Student(index), Member::Student(student)) => self.students[index] = student,
            (Slot::Teacher(index), Member::Teacher(teacher)) => self.teachers[index] = teacher,
            (Slot::NonTeachingStaff(index), Member::NonTeachingStaff(staff)) => {
                self.non_teaching_staffs[index] = staff
            }
            (slot, other) => {
                warn!(
                    "event=member_update module=repo status=rejected member_id={} slot_kind={} record_kind={}",
                    person_id,
                    slot.kind(),
                    other.kind()
                );
                return Err(RepoError::InvalidArgument(format!(
                    "cannot replace {} `{person_id}` with a {} record",
                    slot.kind(),
                    other.kind()
                )));
            }
        }

        info!(
            "event=member_update module=repo status=ok kind={} member_id={person_id}",
            slot.kind()
        );
        self.save()?;
        Ok(true)
    }

    /// Removes the first record whose identifying key equals `person_id`.
    ///
    /// Returns `Ok(false)` when no record matches.
    pub fn remove(&mut self, person_id: &str) -> RepoResult<bool> {
        let Some(slot) = self.locate(person_id) else {
            info!("event=member_remove module=repo status=miss member_id={person_id}");
            return Ok(false);
        };

        match slot {
            Slot::Student(index) => {
                self.students.remove(index);
            }
            Slot::Teacher(index) => {
                self.teachers.remove(index);
            }
            Slot::NonTeachingStaff(index) => {
                self.non_teaching_staffs.remove(index);
            }
        }

        info!(
            "event=member_remove module=repo status=ok kind={} member_id={person_id}",
            slot.kind()
        );
        self.save()?;
        Ok(true)
    }

    /// Returns a copy of the first record whose identifying key equals
    /// `person_id`.
    pub fn find(&self, person_id: &str) -> Option<Member> {
        self.locate(person_id).map(|slot| match slot {
            Slot::Student(index) => Member::Student(self.students[index].clone()),
            Slot::Teacher(index) => Member::Teacher(self.teachers[index].clone()),
            Slot::NonTeachingStaff(index) => {
                Member::NonTeachingStaff(self.non_teaching_staffs[index].clone())
            }
        })
    }

    /// Writes all three collections to the backing file.
    ///
    /// # Side effects
    /// - Overwrites the file wholesale; a crash mid-write may truncate it.
    /// - Emits `roster_save` logging events with counts and duration.
    pub fn save(&self) -> RepoResult<()> {
        let started_at = Instant::now();
        let view = RosterDocumentView {
            students: &self.students,
            teachers: &self.teachers,
            non_teaching_staffs: &self.non_teaching_staffs,
        };

        match write_document(&self.file_path, &view) {
            Ok(()) => {
                info!(
                    "event=roster_save module=repo status=ok students={} teachers={} non_teaching_staffs={} duration_ms={}",
                    self.students.len(),
                    self.teachers.len(),
                    self.non_teaching_staffs.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=roster_save module=repo status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Discards in-memory state and loads the backing file again.
    ///
    /// On an I/O error the current state is kept.
    pub fn reload(&mut self) -> RepoResult<()> {
        self.load()
    }

    fn load(&mut self) -> RepoResult<()> {
        let started_at = Instant::now();
        let outcome = match read_document(&self.file_path) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(
                    "event=roster_load module=repo status=error path={} error={}",
                    self.file_path.display(),
                    err
                );
                return Err(err);
            }
        };

        let document = match outcome {
            LoadOutcome::Loaded(document) => {
                info!(
                    "event=roster_load module=repo status=ok students={} teachers={} non_teaching_staffs={} duration_ms={}",
                    document.students.len(),
                    document.teachers.len(),
                    document.non_teaching_staffs.len(),
                    started_at.elapsed().as_millis()
                );
                document
            }
            LoadOutcome::Missing => {
                info!(
                    "event=roster_load module=repo status=empty reason=file_missing path={}",
                    self.file_path.display()
                );
                RosterDocument::default()
            }
            LoadOutcome::Malformed(err) => {
                warn!(
                    "event=roster_load module=repo status=empty reason=malformed_json path={} error={}",
                    self.file_path.display(),
                    err
                );
                RosterDocument::default()
            }
        };

        self.students = document.students;
        self.teachers = document.teachers;
        self.non_teaching_staffs = document.non_teaching_staffs;
        Ok(())
    }

    fn locate(&self, person_id: &str) -> Option<Slot> {
        if let Some(index) = position_of(&self.students, person_id) {
            return Some(Slot::Student(index));
        }
        if let Some(index) = position_of(&self.teachers, person_id) {
            return Some(Slot::Teacher(index));
        }
        position_of(&self.non_teaching_staffs, person_id).map(Slot::NonTeachingStaff)
    }
}

impl MemberRepository for DataManager {
    fn add_member(&mut self, member: Member) -> RepoResult<()> {
        self.add(member)
    }

    fn update_member(&mut self, person_id: &str, member: Member) -> RepoResult<bool> {
        self.update(person_id, member)
    }

    fn remove_member(&mut self, person_id: &str) -> RepoResult<bool> {
        self.remove(person_id)
    }

    fn find_member(&self, person_id: &str) -> RepoResult<Option<Member>> {
        Ok(self.find(person_id))
    }

    fn list_members(&self, kind: Option<MemberKind>) -> RepoResult<Vec<Member>> {
        let members = match kind {
            None => self.members(),
            Some(MemberKind::Student) => self.students.iter().cloned().map(Member::from).collect(),
            Some(MemberKind::Teacher) => self.teachers.iter().cloned().map(Member::from).collect(),
            Some(MemberKind::NonTeachingStaff) => self
                .non_teaching_staffs
                .iter()
                .cloned()
                .map(Member::from)
                .collect(),
        };
        Ok(members)
    }
}

/// JSON has no encoding for NaN or infinity; `serde_json` would write `null`
/// and the next load would reject the whole document.
fn ensure_storable(member: &Member) -> RepoResult<()> {
    match member.salary() {
        Some(salary) if !salary.is_finite() => {
            warn!(
                "event=member_validate module=repo status=rejected kind={} member_id={} reason=non_finite_salary",
                member.kind(),
                member.member_id()
            );
            Err(RepoError::InvalidArgument(format!(
                "salary of {} `{}` must be finite, got {salary}",
                member.kind(),
                member.member_id()
            )))
        }
        _ => Ok(()),
    }
}

fn position_of<T: MemberRecord>(records: &[T], person_id: &str) -> Option<usize> {
    records
        .iter()
        .position(|record| record.member_id() == person_id)
}
