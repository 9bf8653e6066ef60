//! # Roster Adapter Layer
//!
//! Implementations of the domain ports.
//!
//! ## Structure
//!
//! - `repository/` - Storage implementations

pub mod repository;

pub use repository::in_memory::InMemoryStudentRepository;
