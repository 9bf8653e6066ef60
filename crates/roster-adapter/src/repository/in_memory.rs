//! In-Memory Repository Implementation
//!
//! The roster lives for the process duration only.
//! Single-threaded, so a plain Vec keeps insertion order without locking.

use roster_domain::model::student::Student;
use roster_domain::repository::student_repository::{RepositoryError, StudentRepository};

/// In-memory Student Repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    students: Vec<Student>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow the stored students without cloning
    pub fn students(&self) -> &[Student] {
        &self.students
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn add(&mut self, student: Student) -> Result<(), RepositoryError> {
        self.students.push(student);
        Ok(())
    }

    fn list_all(&self) -> Result<Vec<Student>, RepositoryError> {
        Ok(self.students.clone())
    }

    fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.students.len())
    }
}
