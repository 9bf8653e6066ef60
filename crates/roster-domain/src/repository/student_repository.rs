//! Student Repository - Abstract storage for the roster
//!
//! The roster is an ordered collection: records come back in the order
//! they were added, duplicates included. There is no removal.

use crate::model::student::Student;

/// Errors that can occur during repository operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// Failed to store or read records
    PersistenceError { message: String },
}

impl core::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RepositoryError::PersistenceError { message } => {
                write!(f, "Persistence error: {}", message)
            }
        }
    }
}

impl std::error::Error for RepositoryError {}

/// Student Repository Trait
///
/// This is a PORT in hexagonal architecture.
/// The shell only ever appends and lists.
pub trait StudentRepository {
    /// Append a student at the end of the roster
    fn add(&mut self, student: Student) -> Result<(), RepositoryError>;

    /// All students, in insertion order
    fn list_all(&self) -> Result<Vec<Student>, RepositoryError>;

    /// Number of stored students
    fn count(&self) -> Result<usize, RepositoryError>;

    /// Check whether the roster holds no students
    fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.count()? == 0)
    }
}
