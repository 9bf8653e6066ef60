//! Full shell sessions driven through the library API

use std::io::{Cursor, Write};

use cli::interactive::Shell;
use cli::terminal::Terminal;
use roster_adapter::InMemoryStudentRepository;
use roster_domain::StudentRepository;
use shared::RosterConfig;

fn run_session(config: &RosterConfig, input: &str) -> (usize, String, String) {
    let mut term = Terminal::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), Vec::new());
    let mut shell =
        Shell::from_config(InMemoryStudentRepository::new(), config, &mut term).unwrap();
    shell.run(&mut term).unwrap();

    let count = shell.repository().count().unwrap();
    let (_, out, err) = term.into_parts();
    (
        count,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn test_seeded_session_add_and_list() {
    let (count, out, err) = run_session(&RosterConfig::default(), "1\nTest\n30\n9.5\n2\n3\n");

    assert_eq!(count, 4);
    assert!(err.is_empty());
    assert!(out.contains(
        "Name: Test, Age: 30, Average grade: 9.5\nPerformance: Excellent\nAdult: Yes\n\n"
    ));
    assert!(out.ends_with("Exiting the program.\n"));
}

#[test]
fn test_config_file_session() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "seed": [
                {{ "name": "Olga", "age": 16, "averageGrade": 3.5 }},
                {{ "name": "", "age": 20, "averageGrade": 5.0 }}
            ],
            "maxInputAttempts": 1
        }}"#
    )
    .unwrap();

    let config = RosterConfig::from_file(file.path()).unwrap();
    let (count, out, err) = run_session(&config, "1\nPetr\nold\n2\n3\n");

    assert_eq!(count, 1);
    assert!(err.contains("Error creating student: Name cannot be empty.\n"));
    assert!(err.contains("Error: too many invalid inputs\n"));
    assert!(out.contains(
        "Name: Olga, Age: 16, Average grade: 3.5\nPerformance: Unsatisfactory\nAdult: No\n\n"
    ));
}

#[test]
fn test_unseeded_session_lists_empty() {
    let config = RosterConfig::default().without_seed();
    let (count, out, _) = run_session(&config, "2\n3\n");

    assert_eq!(count, 0);
    assert!(out.contains("The student list is empty.\n"));
}
