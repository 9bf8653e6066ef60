//! # Roster Domain Layer
//!
//! Student records, their validation rules and the derived ratings.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Student, Performance, ValidationError         ││
//! │  │  repository/- Trait definitions (not implementations)       ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! This crate has no external dependencies.

pub mod model;
pub mod repository;

// Re-export commonly used types
pub use model::{
    performance::Performance,
    student::{Student, ValidationError, ADULT_AGE, MAX_GRADE, MIN_GRADE},
};

pub use repository::student_repository::{RepositoryError, StudentRepository};
