//! `roster` command-line front-end.
//!
//! # Responsibility
//! - Map subcommands onto `RosterService` calls over a `DataManager`.
//! - Print records for humans; misses exit with status 1.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use log::info;
use roster_core::{
    create_non_teaching_staff, create_student, create_teacher, DataManager, MemberKind,
    MemberRecord, RosterService,
};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(2)
        }
    }
}

/// Returns `Ok(false)` when the target id was not found.
fn run(cli: Cli) -> Result<bool> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or_else(|| roster_core::default_log_level());
        roster_core::init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let data_file = cli.data_file.as_path();
    match cli.command {
        Commands::Version => {
            println!("roster {}", roster_core::core_version());
            Ok(true)
        }
        Commands::List { kind } => {
            let service = open_service(data_file)?;
            let members = service.list(kind.map(MemberKind::from))?;
            if members.is_empty() {
                println!("No members.");
            }
            for member in members {
                println!("[{}] {}", member.kind(), member);
            }
            Ok(true)
        }
        Commands::Show { id } => {
            let service = open_service(data_file)?;
            match service.find(&id)? {
                Some(member) => {
                    println!("[{}] {}", member.kind(), member);
                    println!("Age: {}", member.person().age());
                    Ok(true)
                }
                None => not_found(&id),
            }
        }
        Commands::Remove { id } => {
            let mut service = open_service(data_file)?;
            if service.remove(&id)? {
                println!("Removed {id}.");
                Ok(true)
            } else {
                not_found(&id)
            }
        }
        Commands::AddStudent {
            name,
            dob,
            admit_id,
            grade,
            contact,
        } => {
            let mut student = create_student(name, dob, admit_id.clone(), grade);
            if let Some(contact) = contact {
                student = student.with_contact(contact);
            }
            open_service(data_file)?.add(student.into())?;
            println!("Added student {admit_id}.");
            Ok(true)
        }
        Commands::AddTeacher {
            name,
            dob,
            employee_id,
            subject,
            salary,
            contact,
        } => {
            let id = employee_id.clone();
            let mut teacher = create_teacher(name, dob, employee_id, subject, salary);
            if let Some(contact) = contact {
                teacher = teacher.with_contact(contact);
            }
            open_service(data_file)?.add(teacher.into())?;
            println!("Added teacher {id}.");
            Ok(true)
        }
        Commands::AddStaff {
            name,
            dob,
            employee_id,
            role,
            salary,
            contact,
        } => {
            let id = employee_id.clone();
            let mut staff = create_non_teaching_staff(name, dob, employee_id, role, salary);
            if let Some(contact) = contact {
                staff = staff.with_contact(contact);
            }
            open_service(data_file)?.add(staff.into())?;
            println!("Added staff {id}.");
            Ok(true)
        }
        Commands::AssignSubject { id, subject } => {
            let changed = open_service(data_file)?.assign_subject(&id, &subject)?;
            report_change(changed, &id)
        }
        Commands::AssignRole { id, role } => {
            let changed = open_service(data_file)?.assign_role(&id, &role)?;
            report_change(changed, &id)
        }
        Commands::SetSalary { id, salary } => {
            let changed = open_service(data_file)?.set_salary(&id, salary)?;
            report_change(changed, &id)
        }
    }
}

fn open_service(path: &Path) -> Result<RosterService<DataManager>> {
    let manager = DataManager::open(path)
        .with_context(|| format!("failed to open roster file `{}`", path.display()))?;
    info!("event=cli_command module=cli status=start");
    Ok(RosterService::new(manager))
}

fn report_change(changed: bool, id: &str) -> Result<bool> {
    if changed {
        println!("Updated {id}.");
        Ok(true)
    } else {
        eprintln!("No matching member for `{id}`.");
        Ok(false)
    }
}

fn not_found(id: &str) -> Result<bool> {
    eprintln!("No member with id `{id}`.");
    Ok(false)
}
