//! Domain Models
//!
//! The vocabulary of the roster: a student record and the rating
//! derived from its average grade.

pub mod performance;
pub mod student;
