//! Command implementations for the Free Fire ID Checker.

pub mod batch;
pub mod check_id;
