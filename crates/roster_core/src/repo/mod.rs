//! Repository layer: member persistence over a single JSON document.
//!
//! # Responsibility
//! - Define the member data access contract.
//! - Keep file and JSON details inside the persistence boundary.
//!
//! # Invariants
//! - Every successful mutation is followed by a full document save.
//! - Lookups scan Students, then Teachers, then NonTeachingStaffs.

pub mod document;
pub mod member_repo;
