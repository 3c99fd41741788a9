//! Member domain model.
//!
//! # Responsibility
//! - Define `Person` and the `Student`/`Teacher`/`NonTeachingStaff` variants.
//! - Provide derived accessors (age, salary) and human-readable rendering.
//!
//! # Invariants
//! - `admit_id` is the identifying key for students, `employee_id` for
//!   teachers and non-teaching staff.
//! - Serialized shape is flat: base fields first, then variant fields, with
//!   no type discriminator.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Closed set of member variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemberKind {
    Student,
    Teacher,
    NonTeachingStaff,
}

impl MemberKind {
    /// Top-level key of this variant's array in the persisted document.
    pub fn collection_key(self) -> &'static str {
        match self {
            Self::Student => "Students",
            Self::Teacher => "Teachers",
            Self::NonTeachingStaff => "NonTeachingStaffs",
        }
    }

    /// Stable snake_case name used in log events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Teacher => "teacher",
            Self::NonTeachingStaff => "non_teaching_staff",
        }
    }
}

impl Display for MemberKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform access to the identifying key and base fields of any record.
pub trait MemberRecord {
    fn kind(&self) -> MemberKind;
    /// `admit_id` for students, `employee_id` otherwise.
    fn member_id(&self) -> &str;
    fn person(&self) -> &Person;
}

/// Base fields shared by every member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    /// Serialized as `YYYY-MM-DD` and decoded back into a date on load.
    pub dob: NaiveDate,
    /// Written as `null` when absent.
    #[serde(default)]
    pub contact: Option<String>,
}

impl Person {
    pub fn new(name: impl Into<String>, dob: NaiveDate) -> Self {
        Self {
            name: name.into(),
            dob,
            contact: None,
        }
    }

    /// Whole years elapsed between `dob` and `on`.
    ///
    /// Negative when `on` precedes the birth date.
    pub fn age_on(&self, on: NaiveDate) -> i32 {
        let years = on.year() - self.dob.year();
        if (on.month(), on.day()) < (self.dob.month(), self.dob.day()) {
            years - 1
        } else {
            years
        }
    }

    /// Age as of today's local date.
    pub fn age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }
}

impl Display for Person {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Name: {}, DOB: {}, Contact: {}",
            self.name,
            self.dob,
            self.contact.as_deref().unwrap_or("None")
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    #[serde(flatten)]
    pub person: Person,
    pub admit_id: String,
    pub grade: String,
}

impl Student {
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.person.contact = Some(contact.into());
        self
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, Admit ID: {}, Grade: {}",
            self.person, self.admit_id, self.grade
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(flatten)]
    pub person: Person,
    pub employee_id: String,
    pub subject: String,
    pub salary: f64,
}

impl Teacher {
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.person.contact = Some(contact.into());
        self
    }

    pub fn assign_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }
}

impl Display for Teacher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, Employee ID: {}, Subject: {}, Salary: {:?}",
            self.person, self.employee_id, self.subject, self.salary
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NonTeachingStaff {
    #[serde(flatten)]
    pub person: Person,
    pub employee_id: String,
    pub role: String,
    pub salary: f64,
}

impl NonTeachingStaff {
    pub fn with_contact(mut self, contact: impl Into<String>) -> Self {
        self.person.contact = Some(contact.into());
        self
    }

    pub fn assign_role(&mut self, role: impl Into<String>) {
        self.role = role.into();
    }
}

impl Display for NonTeachingStaff {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, Employee ID: {}, Role: {}, Salary: {:?}",
            self.person, self.employee_id, self.role, self.salary
        )
    }
}

impl MemberRecord for Student {
    fn kind(&self) -> MemberKind {
        MemberKind::Student
    }

    fn member_id(&self) -> &str {
        &self.admit_id
    }

    fn person(&self) -> &Person {
        &self.person
    }
}

impl MemberRecord for Teacher {
    fn kind(&self) -> MemberKind {
        MemberKind::Teacher
    }

    fn member_id(&self) -> &str {
        &self.employee_id
    }

    fn person(&self) -> &Person {
        &self.person
    }
}

impl MemberRecord for NonTeachingStaff {
    fn kind(&self) -> MemberKind {
        MemberKind::NonTeachingStaff
    }

    fn member_id(&self) -> &str {
        &self.employee_id
    }

    fn person(&self) -> &Person {
        &self.person
    }
}

/// Any record the roster can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Student(Student),
    Teacher(Teacher),
    NonTeachingStaff(NonTeachingStaff),
}

impl Member {
    /// Salary for employees, `None` for students.
    pub fn salary(&self) -> Option<f64> {
        match self {
            Self::Student(_) => None,
            Self::Teacher(teacher) => Some(teacher.salary),
            Self::NonTeachingStaff(staff) => Some(staff.salary),
        }
    }
}

impl MemberRecord for Member {
    fn kind(&self) -> MemberKind {
        match self {
            Self::Student(_) => MemberKind::Student,
            Self::Teacher(_) => MemberKind::Teacher,
            Self::NonTeachingStaff(_) => MemberKind::NonTeachingStaff,
        }
    }

    fn member_id(&self) -> &str {
        match self {
            Self::Student(student) => student.member_id(),
            Self::Teacher(teacher) => teacher.member_id(),
            Self::NonTeachingStaff(staff) => staff.member_id(),
        }
    }

    fn person(&self) -> &Person {
        match self {
            Self::Student(student) => &student.person,
            Self::Teacher(teacher) => &teacher.person,
            Self::NonTeachingStaff(staff) => &staff.person,
        }
    }
}

impl Display for Member {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Student(student) => Display::fmt(student, f),
            Self::Teacher(teacher) => Display::fmt(teacher, f),
            Self::NonTeachingStaff(staff) => Display::fmt(staff, f),
        }
    }
}

impl From<Student> for Member {
    fn from(value: Student) -> Self {
        Self::Student(value)
    }
}

impl From<Teacher> for Member {
    fn from(value: Teacher) -> Self {
        Self::Teacher(value)
    }
}

impl From<NonTeachingStaff> for Member {
    fn from(value: NonTeachingStaff) -> Self {
        Self::NonTeachingStaff(value)
    }
}

pub fn create_student(
    name: impl Into<String>,
    dob: NaiveDate,
    admit_id: impl Into<String>,
    grade: impl Into<String>,
) -> Student {
    Student {
        person: Person::new(name, dob),
        admit_id: admit_id.into(),
        grade: grade.into(),
    }
}

pub fn create_teacher(
    name: impl Into<String>,
    dob: NaiveDate,
    employee_id: impl Into<String>,
    subject: impl Into<String>,
    salary: f64,
) -> Teacher {
    Teacher {
        person: Person::new(name, dob),
        employee_id: employee_id.into(),
        subject: subject.into(),
        salary,
    }
}

pub fn create_non_teaching_staff(
    name: impl Into<String>,
    dob: NaiveDate,
    employee_id: impl Into<String>,
    role: impl Into<String>,
    salary: f64,
) -> NonTeachingStaff {
    NonTeachingStaff {
        person: Person::new(name, dob),
        employee_id: employee_id.into(),
        role: role.into(),
        salary,
    }
}
