//! Interactive shell mode
//!
//! Menu loop over a student roster: add, list, exit.

use std::io::{BufRead, Write};
use std::str::FromStr;

use roster_domain::{Student, StudentRepository};
use shared::{RosterConfig, StudentSeed, DEFAULT_MAX_INPUT_ATTEMPTS};
use tracing::{debug, info};

use crate::menu::{self, MenuChoice};
use crate::terminal::Terminal;

/// What the loop should do after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Outcome of a numeric prompt
#[derive(Debug, PartialEq)]
enum NumberInput<T> {
    Value(T),
    TooManyInvalid,
    Closed,
}

/// Interactive roster shell
pub struct Shell<R> {
    repo: R,
    max_input_attempts: usize,
}

impl<R: StudentRepository> Shell<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            max_input_attempts: DEFAULT_MAX_INPUT_ATTEMPTS,
        }
    }

    /// Create a shell from configuration, loading its seed list
    ///
    /// Seeds that fail validation are reported and skipped.
    pub fn from_config<I, O, E>(
        repo: R,
        config: &RosterConfig,
        term: &mut Terminal<I, O, E>,
    ) -> shared::Result<Self>
    where
        I: BufRead,
        O: Write,
        E: Write,
    {
        let mut shell = Self::new(repo).with_max_input_attempts(config.max_input_attempts);
        shell.seed(&config.seed, term)?;
        Ok(shell)
    }

    /// Builder: tries allowed for each numeric prompt (at least 1)
    pub fn with_max_input_attempts(mut self, attempts: usize) -> Self {
        self.max_input_attempts = attempts.max(1);
        self
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Add seed students; returns how many were accepted
    pub fn seed<I, O, E>(
        &mut self,
        seeds: &[StudentSeed],
        term: &mut Terminal<I, O, E>,
    ) -> shared::Result<usize>
    where
        I: BufRead,
        O: Write,
        E: Write,
    {
        let mut added = 0;
        for seed in seeds {
            match seed.to_student() {
                Ok(student) => {
                    debug!(name = student.name(), "seeded student");
                    self.repo.add(student)?;
                    added += 1;
                }
                Err(e) => {
                    info!(name = %seed.name, error = %e, "rejected seed student");
                    term.warn(format!("Error creating student: {}", e))?;
                }
            }
        }
        Ok(added)
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run<I, O, E>(&mut self, term: &mut Terminal<I, O, E>) -> shared::Result<()>
    where
        I: BufRead,
        O: Write,
        E: Write,
    {
        loop {
            term.prompt(menu::MENU)?;
            term.prompt(menu::CHOICE_PROMPT)?;

            let Some(line) = term.read_line()? else {
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                MenuChoice::Add => self.add_student(term)?,
                MenuChoice::List => {
                    self.show_students(term)?;
                    Flow::Continue
                }
                MenuChoice::Exit => Flow::Exit,
                MenuChoice::Invalid => {
                    term.say(menu::INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                break;
            }
        }

        term.say(menu::FAREWELL)?;
        Ok(())
    }

    /// Prompt for a new student and append it if valid
    fn add_student<I, O, E>(&mut self, term: &mut Terminal<I, O, E>) -> shared::Result<Flow>
    where
        I: BufRead,
        O: Write,
        E: Write,
    {
        term.prompt(menu::NAME_PROMPT)?;
        let Some(name) = term.read_line()? else {
            return Ok(Flow::Exit);
        };
        // Leading blanks are not part of the name
        let name = name.trim_start().to_string();

        let age = match self.read_number::<i32, _, _, _>(term, menu::AGE_PROMPT)? {
            NumberInput::Value(age) => age,
            NumberInput::TooManyInvalid => return self.abandon_add(term),
            NumberInput::Closed => return Ok(Flow::Exit),
        };

        let grade = match self.read_number::<f64, _, _, _>(term, menu::GRADE_PROMPT)? {
            NumberInput::Value(grade) => grade,
            NumberInput::TooManyInvalid => return self.abandon_add(term),
            NumberInput::Closed => return Ok(Flow::Exit),
        };

        match Student::new(name, age, grade) {
            Ok(student) => {
                debug!(name = student.name(), age, grade, "student added");
                self.repo.add(student)?;
                term.say(menu::ADDED)?;
            }
            Err(e) => {
                info!(error = %e, "rejected student");
                term.report_error(e)?;
            }
        }

        Ok(Flow::Continue)
    }

    fn abandon_add<I, O, E>(&self, term: &mut Terminal<I, O, E>) -> shared::Result<Flow>
    where
        I: BufRead,
        O: Write,
        E: Write,
    {
        info!(attempts = self.max_input_attempts, "add abandoned after invalid input");
        term.report_error(menu::TOO_MANY_INVALID)?;
        Ok(Flow::Continue)
    }

    /// Prompt until the line parses as `T`, input ends, or tries run out
    fn read_number<T, I, O, E>(
        &self,
        term: &mut Terminal<I, O, E>,
        prompt: &str,
    ) -> shared::Result<NumberInput<T>>
    where
        T: FromStr,
        I: BufRead,
        O: Write,
        E: Write,
    {
        for attempt in 1..=self.max_input_attempts {
            term.prompt(prompt)?;
            let Some(line) = term.read_line()? else {
                return Ok(NumberInput::Closed);
            };

            if let Ok(value) = line.trim().parse::<T>() {
                return Ok(NumberInput::Value(value));
            }

            debug!(attempt, input = %line, "not a number");
            term.say(menu::INVALID_NUMBER)?;
        }

        Ok(NumberInput::TooManyInvalid)
    }

    /// Print every student with its rating, in insertion order
    fn show_students<I, O, E>(&self, term: &mut Terminal<I, O, E>) -> shared::Result<()>
    where
        I: BufRead,
        O: Write,
        E: Write,
    {
        if self.repo.is_empty()? {
            term.say(menu::EMPTY_LIST)?;
            return Ok(());
        }

        for student in self.repo.list_all()? {
            student.display(term.out())?;
            let label = term.performance_label(student.evaluate_performance());
            term.say(format!("Performance: {}", label))?;
            term.say(format!(
                "Adult: {}\n",
                if student.is_adult() { "Yes" } else { "No" }
            ))?;
        }

        Ok(())
    }
}
