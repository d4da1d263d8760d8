//! History storage abstractions.
//!
//! # Responsibility
//! - Define the session history contract used by the calculator service.
//! - Provide the volatile in-memory implementation.
//!
//! # Invariants
//! - History is append-only until a full clear.
//! - Nothing outlives the owning session.

pub mod history_repo;
