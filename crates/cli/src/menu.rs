//! Menu choices and the fixed console text

/// Menu printed before every choice prompt
pub const MENU: &str = "\n--- MENU ---\n1. Add student\n2. Show all students\n3. Exit\n";

pub const CHOICE_PROMPT: &str = "Choose an action: ";
pub const NAME_PROMPT: &str = "Enter name: ";
pub const AGE_PROMPT: &str = "Enter age: ";
pub const GRADE_PROMPT: &str = "Enter average grade: ";

pub const ADDED: &str = "Student added successfully.";
pub const EMPTY_LIST: &str = "The student list is empty.";
pub const FAREWELL: &str = "Exiting the program.";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const INVALID_NUMBER: &str = "Invalid number, please try again.";
pub const TOO_MANY_INVALID: &str = "too many invalid inputs";

/// A parsed menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// 1 - add a student
    Add,
    /// 2 - list all students
    List,
    /// 3 - leave the shell
    Exit,
    /// Anything else, including non-numbers
    Invalid,
}

impl MenuChoice {
    /// Parse one line of user input
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<i64>() {
            Ok(1) => MenuChoice::Add,
            Ok(2) => MenuChoice::List,
            Ok(3) => MenuChoice::Exit,
            _ => MenuChoice::Invalid,
        }
    }
}
