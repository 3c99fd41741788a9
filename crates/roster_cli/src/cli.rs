//! Command-line arguments for the `roster` binary.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use roster_core::MemberKind;
use std::path::PathBuf;

/// Roster - manage students, teachers and non-teaching staff
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// JSON file the roster is persisted to
    #[arg(
        long,
        global = true,
        env = "ROSTER_DATA_FILE",
        default_value = "roster.json"
    )]
    pub data_file: PathBuf,

    /// Absolute directory for rolling log files (logging is off when unset)
    #[arg(long, global = true, env = "ROSTER_LOG_DIR")]
    pub log_dir: Option<String>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, env = "ROSTER_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List members in lookup order
    List {
        /// Only list one kind of member
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
    },

    /// Show the member with the given id
    Show { id: String },

    /// Remove the member with the given id
    Remove { id: String },

    /// Enroll a student
    AddStudent {
        #[arg(long)]
        name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: NaiveDate,
        #[arg(long)]
        admit_id: String,
        #[arg(long)]
        grade: String,
        #[arg(long)]
        contact: Option<String>,
    },

    /// Hire a teacher
    AddTeacher {
        #[arg(long)]
        name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: NaiveDate,
        #[arg(long)]
        employee_id: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        salary: f64,
        #[arg(long)]
        contact: Option<String>,
    },

    /// Hire a non-teaching staff member
    AddStaff {
        #[arg(long)]
        name: String,
        /// Date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: NaiveDate,
        #[arg(long)]
        employee_id: String,
        #[arg(long)]
        role: String,
        #[arg(long)]
        salary: f64,
        #[arg(long)]
        contact: Option<String>,
    },

    /// Change a teacher's subject
    AssignSubject { id: String, subject: String },

    /// Change a staff member's role
    AssignRole { id: String, role: String },

    /// Change a teacher's or staff member's salary
    SetSalary { id: String, salary: f64 },

    /// Display version information
    Version,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    Student,
    Teacher,
    Staff,
}

impl From<KindArg> for MemberKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Student => MemberKind::Student,
            KindArg::Teacher => MemberKind::Teacher,
            KindArg::Staff => MemberKind::NonTeachingStaff,
        }
    }
}
