//! Record model for school members.
//!
//! # Responsibility
//! - Define the canonical shapes stored by the roster.
//! - Keep the three member variants in one closed set.
//!
//! # Invariants
//! - Every record exposes its identifying key through `MemberRecord`.
//! - Fields are accepted as given; the model performs no validation.

pub mod member;
