//! Core domain logic for the school roster.
//! Holds students, teachers and non-teaching staff in memory and persists
//! them write-through to a single JSON file.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::member::{
    create_non_teaching_staff, create_student, create_teacher, Member, MemberKind, MemberRecord,
    NonTeachingStaff, Person, Student, Teacher,
};
pub use repo::member_repo::{DataManager, MemberRepository, RepoError, RepoResult};
pub use service::roster_service::RosterService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
