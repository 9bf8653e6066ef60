//! Roster CLI - Interactive student roster
//!
//! Usage:
//!   roster                        - Start with the built-in seed students
//!   roster --no-seed              - Start with an empty roster
//!   roster --config roster.json   - Load seed list and limits from a file

use std::io;
use std::path::PathBuf;

use clap::Parser;
use cli::interactive::Shell;
use cli::logging;
use cli::terminal::Terminal;
use roster_adapter::InMemoryStudentRepository;
use shared::RosterConfig;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Student roster - add and list student records")]
#[command(version)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Start with an empty roster
    #[arg(long)]
    no_seed: bool,
}

fn main() -> anyhow::Result<()> {
    logging::init()?;

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RosterConfig::from_file(path)?,
        None => RosterConfig::default(),
    };
    if cli.no_seed {
        config = config.without_seed();
    }

    let stdin = io::stdin();
    let mut term = Terminal::new(stdin.lock(), io::stdout(), io::stderr())
        .with_style(console::colors_enabled(), console::colors_enabled_stderr());

    let mut shell = Shell::from_config(InMemoryStudentRepository::new(), &config, &mut term)?;
    shell.run(&mut term)?;

    Ok(())
}
