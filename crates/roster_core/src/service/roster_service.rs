//! Roster use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for enrolling and hiring members.
//! - Apply single-field changes (subject, role, salary) through the
//!   repository's update path so they are persisted.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::member::{
    create_non_teaching_staff, create_student, create_teacher, Member, MemberKind,
};
use crate::repo::member_repo::{MemberRepository, RepoResult};
use chrono::NaiveDate;

/// Use-case service wrapper for member operations.
pub struct RosterService<R: MemberRepository> {
    repo: R,
}

impl<R: MemberRepository> RosterService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Borrows the underlying repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Consumes the service and returns the repository.
    pub fn into_repo(self) -> R {
        self.repo
    }

    pub fn enroll_student(
        &mut self,
        name: impl Into<String>,
        dob: NaiveDate,
        admit_id: impl Into<String>,
        grade: impl Into<String>,
    ) -> RepoResult<()> {
        let student = create_student(name, dob, admit_id, grade);
        self.repo.add_member(student.into())
    }

    pub fn hire_teacher(
        &mut self,
        name: impl Into<String>,
        dob: NaiveDate,
        employee_id: impl Into<String>,
        subject: impl Into<String>,
        salary: f64,
    ) -> RepoResult<()> {
        let teacher = create_teacher(name, dob, employee_id, subject, salary);
        self.repo.add_member(teacher.into())
    }

    pub fn hire_non_teaching_staff(
        &mut self,
        name: impl Into<String>,
        dob: NaiveDate,
        employee_id: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
    ) -> RepoResult<()> {
        let staff = create_non_teaching_staff(name, dob, employee_id, role, salary);
        self.repo.add_member(staff.into())
    }

    /// Adds an already-built record.
    pub fn add(&mut self, member: Member) -> RepoResult<()> {
        self.repo.add_member(member)
    }

    /// Changes the subject of the teacher resolved by `employee_id`.
    ///
    /// # Contract
    /// - Returns `Ok(false)` when the id resolves to nothing or to a
    ///   non-teacher record; nothing is written in that case.
    pub fn assign_subject(&mut self, employee_id: &str, subject: &str) -> RepoResult<bool> {
        match self.repo.find_member(employee_id)? {
            Some(Member::Teacher(mut teacher)) => {
                teacher.assign_subject(subject);
                self.repo.update_member(employee_id, teacher.into())
            }
            _ => Ok(false),
        }
    }

    /// Changes the role of the non-teaching staff member resolved by
    /// `employee_id`.
    ///
    /// # Contract
    /// - Returns `Ok(false)` when the id resolves to nothing or to a record
    ///   of another variant; nothing is written in that case.
    pub fn assign_role(&mut self, employee_id: &str, role: &str) -> RepoResult<bool> {
        match self.repo.find_member(employee_id)? {
            Some(Member::NonTeachingStaff(mut staff)) => {
                staff.assign_role(role);
                self.repo.update_member(employee_id, staff.into())
            }
            _ => Ok(false),
        }
    }

    /// Sets the salary of the teacher or staff member resolved by
    /// `employee_id`. Students have no salary and yield `Ok(false)`.
    pub fn set_salary(&mut self, employee_id: &str, salary: f64) -> RepoResult<bool> {
        let updated = match self.repo.find_member(employee_id)? {
            Some(Member::Teacher(mut teacher)) => {
                teacher.salary = salary;
                Member::Teacher(teacher)
            }
            Some(Member::NonTeachingStaff(mut staff)) => {
                staff.salary = salary;
                Member::NonTeachingStaff(staff)
            }
            Some(Member::Student(_)) | None => return Ok(false),
        };
        self.repo.update_member(employee_id, updated)
    }

    pub fn update(&mut self, person_id: &str, member: Member) -> RepoResult<bool> {
        self.repo.update_member(person_id, member)
    }

    pub fn remove(&mut self, person_id: &str) -> RepoResult<bool> {
        self.repo.remove_member(person_id)
    }

    pub fn find(&self, person_id: &str) -> RepoResult<Option<Member>> {
        self.repo.find_member(person_id)
    }

    /// Lists members in scan order, optionally restricted to one variant.
    pub fn list(&self, kind: Option<MemberKind>) -> RepoResult<Vec<Member>> {
        self.repo.list_members(kind)
    }
}
