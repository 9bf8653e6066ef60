//! Repository Traits - The "Ports" of Hexagonal Architecture
//!
//! ```text
//! Domain Layer          │  Adapter Layer
//! ──────────────────────┼────────────────────────
//! trait StudentRepo     │  InMemoryStudentRepo
//!   fn add()            │
//!   fn list_all()       │
//! ```

pub mod student_repository;
