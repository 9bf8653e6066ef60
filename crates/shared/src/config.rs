//! Configuration types for the roster

use roster_domain::{Student, ValidationError};
use serde::{Deserialize, Serialize};

/// Default number of tries for a numeric prompt
pub const DEFAULT_MAX_INPUT_ATTEMPTS: usize = 3;

/// Unvalidated description of a student loaded at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentSeed {
    pub name: String,
    pub age: i32,
    pub average_grade: f64,
}

impl StudentSeed {
    pub fn new(name: impl Into<String>, age: i32, average_grade: f64) -> Self {
        Self {
            name: name.into(),
            age,
            average_grade,
        }
    }

    /// Validate this seed into a Student
    pub fn to_student(&self) -> std::result::Result<Student, ValidationError> {
        Student::new(self.name.clone(), self.age, self.average_grade)
    }
}

/// Roster configuration (roster.json)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RosterConfig {
    /// Students loaded before the first prompt
    pub seed: Vec<StudentSeed>,

    /// Tries allowed for a numeric prompt before the add is abandoned
    pub max_input_attempts: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            max_input_attempts: DEFAULT_MAX_INPUT_ATTEMPTS,
        }
    }
}

impl RosterConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: &std::path::Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values serde cannot express
    pub fn validate(&self) -> crate::Result<()> {
        if self.max_input_attempts == 0 {
            return Err(crate::RosterError::Config(
                "maxInputAttempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder: drop the seed list
    pub fn without_seed(mut self) -> Self {
        self.seed.clear();
        self
    }
}

fn default_seed() -> Vec<StudentSeed> {
    vec![
        StudentSeed::new("Ivan", 20, 9.1),
        StudentSeed::new("Maria", 17, 7.5),
        StudentSeed::new("Aleksey", 18, 5.2),
    ]
}
