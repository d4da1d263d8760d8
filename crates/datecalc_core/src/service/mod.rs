//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate parsing, date arithmetic and span computation into the
//!   calculator's three modes.
//! - Keep front ends decoupled from history storage and text layout.

pub mod calculator_service;
pub mod export;
