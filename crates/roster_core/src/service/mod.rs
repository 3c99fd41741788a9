//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into enrollment/staffing use cases.
//! - Keep the CLI decoupled from storage details.

pub mod roster_service;
