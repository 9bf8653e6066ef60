//! Student - A validated roster record
//!
//! Student is an Entity without a separate identity: the roster allows
//! duplicates, so two records with equal fields are still two records.
//!
//! IMPORTANT: every field satisfies its bounds at all times. Construction
//! and the setters validate first and only then assign.

use std::io::{self, Write};

use super::performance::Performance;

/// Age from which a student counts as an adult
pub const ADULT_AGE: i32 = 18;

/// Lowest accepted average grade (inclusive)
pub const MIN_GRADE: f64 = 0.0;

/// Highest accepted average grade (inclusive)
pub const MAX_GRADE: f64 = 10.0;

/// Reasons a student record can be rejected
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Name was empty
    EmptyName,
    /// Age was zero or negative
    NonPositiveAge(i32),
    /// Grade was outside [MIN_GRADE, MAX_GRADE] (or NaN)
    GradeOutOfRange(f64),
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "Name cannot be empty."),
            ValidationError::NonPositiveAge(_) => write!(f, "Age must be positive."),
            ValidationError::GradeOutOfRange(_) => write!(
                f,
                "Average grade must be between {} and {}.",
                MIN_GRADE, MAX_GRADE
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

/// A single student's validated attribute set
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    name: String,
    age: i32,
    average_grade: f64,
}

impl Student {
    /// Create a new Student, checking name, then age, then grade
    pub fn new(
        name: impl Into<String>,
        age: i32,
        average_grade: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        validate_age(age)?;
        validate_grade(average_grade)?;

        Ok(Self {
            name,
            age,
            average_grade,
        })
    }

    // ========== Getters ==========

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn average_grade(&self) -> f64 {
        self.average_grade
    }

    // ========== Setters ==========

    /// Replace the name; an empty name leaves the record unchanged
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replace the age; a non-positive age leaves the record unchanged
    pub fn set_age(&mut self, age: i32) -> Result<(), ValidationError> {
        validate_age(age)?;
        self.age = age;
        Ok(())
    }

    /// Replace the grade; an out-of-range grade leaves the record unchanged
    pub fn set_average_grade(&mut self, grade: f64) -> Result<(), ValidationError> {
        validate_grade(grade)?;
        self.average_grade = grade;
        Ok(())
    }

    // ========== Derived ==========

    /// Rate this student's average grade
    pub fn evaluate_performance(&self) -> Performance {
        Performance::from_grade(self.average_grade)
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    /// Write the record's fields as one line
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self)
    }
}

impl core::fmt::Display for Student {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Name: {}, Age: {}, Average grade: {}",
            self.name, self.age, self.average_grade
        )
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

fn validate_age(age: i32) -> Result<(), ValidationError> {
    if age <= 0 {
        return Err(ValidationError::NonPositiveAge(age));
    }
    Ok(())
}

fn validate_grade(grade: f64) -> Result<(), ValidationError> {
    // RangeInclusive::contains is false for NaN
    if !(MIN_GRADE..=MAX_GRADE).contains(&grade) {
        return Err(ValidationError::GradeOutOfRange(grade));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // ============== Construction ==============

    #[test]
    fn test_student_creation() {
        let student = Student::new("Ivan", 20, 9.1).unwrap();

        assert_eq!(student.name(), "Ivan");
        assert_eq!(student.age(), 20);
        assert_eq!(student.average_grade(), 9.1);
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_eq!(Student::new("", 20, 5.0), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_non_positive_age_rejected() {
        assert_eq!(
            Student::new("Ivan", 0, 5.0),
            Err(ValidationError::NonPositiveAge(0))
        );
        assert_eq!(
            Student::new("Ivan", -5, 5.0),
            Err(ValidationError::NonPositiveAge(-5))
        );
    }

    #[test]
    fn test_grade_out_of_range_rejected() {
        assert!(matches!(
            Student::new("Ivan", 20, -0.1),
            Err(ValidationError::GradeOutOfRange(_))
        ));
        assert!(matches!(
            Student::new("Ivan", 20, 10.1),
            Err(ValidationError::GradeOutOfRange(_))
        ));
        assert!(Student::new("Ivan", 20, f64::NAN).is_err());
    }

    #[test]
    fn test_grade_bounds_inclusive() {
        assert!(Student::new("Ivan", 20, 0.0).is_ok());
        assert!(Student::new("Ivan", 20, 10.0).is_ok());
    }

    #[test]
    fn test_first_failure_wins() {
        // Everything is wrong; the name is checked first
        assert_eq!(Student::new("", -1, 42.0), Err(ValidationError::EmptyName));
        assert_eq!(
            Student::new("Ivan", -1, 42.0),
            Err(ValidationError::NonPositiveAge(-1))
        );
    }

    #[test]
    fn test_name_may_contain_spaces() {
        let student = Student::new("Anna Maria", 19, 7.0).unwrap();
        assert_eq!(student.name(), "Anna Maria");
    }

    // ============== Setters ==============

    #[test]
    fn test_setters_update_valid_values() {
        let mut student = Student::new("Ivan", 20, 9.1).unwrap();

        student.set_name("Ivan Petrov").unwrap();
        student.set_age(21).unwrap();
        student.set_average_grade(7.25).unwrap();

        assert_eq!(student.name(), "Ivan Petrov");
        assert_eq!(student.age(), 21);
        assert_eq!(student.average_grade(), 7.25);
    }

    #[test]
    fn test_failed_setters_leave_fields_unchanged() {
        let mut student = Student::new("Maria", 17, 7.5).unwrap();

        assert!(student.set_name("").is_err());
        assert!(student.set_age(0).is_err());
        assert!(student.set_average_grade(11.0).is_err());

        assert_eq!(student, Student::new("Maria", 17, 7.5).unwrap());
    }

    // ============== Derived ==============

    #[test]
    fn test_is_adult() {
        assert!(Student::new("A", 18, 5.0).unwrap().is_adult());
        assert!(!Student::new("A", 17, 5.0).unwrap().is_adult());
    }

    #[test]
    fn test_evaluate_performance() {
        let student = Student::new("Aleksey", 18, 5.2).unwrap();
        assert_eq!(student.evaluate_performance(), Performance::Satisfactory);
    }

    #[test]
    fn test_display_writes_one_line() {
        let student = Student::new("Ivan", 20, 9.1).unwrap();
        let mut out = Vec::new();
        student.display(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name: Ivan, Age: 20, Average grade: 9.1\n"
        );
    }

    #[test]
    fn test_whole_grade_has_no_fraction() {
        let student = Student::new("Ivan", 20, 10.0).unwrap();
        assert_eq!(student.to_string(), "Name: Ivan, Age: 20, Average grade: 10");
    }

    #[test]
    fn test_validation_messages() {
        assert_eq!(ValidationError::EmptyName.to_string(), "Name cannot be empty.");
        assert_eq!(
            ValidationError::NonPositiveAge(0).to_string(),
            "Age must be positive."
        );
        assert_eq!(
            ValidationError::GradeOutOfRange(11.0).to_string(),
            "Average grade must be between 0 and 10."
        );
    }
}
