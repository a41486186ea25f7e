//! CLI argument parsing and headless command handling.
use std::rc::Rc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

use crate::db::KeyValueStore;
use crate::store::{Command as TimerCommand, ThemeStore, TimerStore};
use crate::types::{ThemeMode, TimerStatus, new_timer_id};
use crate::ui::format_seconds;

#[derive(Parser, Debug)]
#[command(
    name = "tickdown",
    version,
    about = "Tickdown - A terminal countdown timer board"
)]
pub struct Cli {
    /// SQLite database file
    #[arg(long, env = "TICKDOWN_DB", global = true)]
    pub db: Option<String>,

    /// Log at debug level
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a paused timer
    Add {
        name: String,
        seconds: u64,
        #[arg(short = 'c', long = "category", default_value = "General")]
        category: String,
    },
    /// List all timers
    List,
    Start {
        id: String,
    },
    Pause {
        id: String,
    },
    Reset {
        id: String,
    },
    Delete {
        id: String,
    },
    /// Show, set or toggle the theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}

/// Execute a headless command against the stores, writing a short report to `out`.
pub fn run(command: Command, storage: Rc<dyn KeyValueStore>, out: &mut impl std::io::Write) -> Result<()> {
    match command {
        Command::Add {
            name,
            seconds,
            category,
        } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                writeln!(out, "Timer name must not be empty.")?;
                return Ok(());
            }
            let id = new_timer_id();
            let mut timers = TimerStore::open(storage);
            timers.dispatch(TimerCommand::Add {
                id: id.clone(),
                name: name.clone(),
                duration: seconds,
                category,
            });
            writeln!(out, "Added '{name}' ({id}).")?;
        }
        Command::List => {
            let timers = TimerStore::open(storage);
            if timers.timers().is_empty() {
                writeln!(out, "No timers.")?;
            }
            for timer in timers.timers() {
                let status = match timer.status {
                    TimerStatus::Running => "running",
                    TimerStatus::Paused => "paused",
                    TimerStatus::Completed => "completed",
                };
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}/{}\t{}",
                    timer.id,
                    timer.category,
                    timer.name,
                    format_seconds(timer.remaining_time),
                    format_seconds(timer.duration),
                    status
                )?;
            }
        }
        Command::Start { id } => dispatch_by_id(storage, out, &id, "Started", TimerCommand::Start)?,
        Command::Pause { id } => dispatch_by_id(storage, out, &id, "Paused", TimerCommand::Pause)?,
        Command::Reset { id } => dispatch_by_id(storage, out, &id, "Reset", TimerCommand::Reset)?,
        Command::Delete { id } => dispatch_by_id(storage, out, &id, "Deleted", TimerCommand::Delete)?,
        Command::Theme { action } => {
            let mut theme = ThemeStore::open(storage);
            match action {
                Some(ThemeAction::Light) => theme.set(ThemeMode::Light),
                Some(ThemeAction::Dark) => theme.set(ThemeMode::Dark),
                Some(ThemeAction::Toggle) => theme.toggle(),
                None => {}
            }
            writeln!(out, "Theme: {}", theme.mode())?;
        }
    }
    Ok(())
}

fn dispatch_by_id(
    storage: Rc<dyn KeyValueStore>,
    out: &mut impl std::io::Write,
    id: &str,
    verb: &str,
    command: fn(String) -> TimerCommand,
) -> Result<()> {
    let mut timers = TimerStore::open(storage);
    let Some(name) = timers.find(id).map(|t| t.name.clone()) else {
        writeln!(out, "Timer '{id}' not found.")?;
        return Ok(());
    };
    timers.dispatch(command(id.to_string()));
    writeln!(out, "{verb} '{name}'.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::store::persist;

    fn exec(args: &[&str], storage: &Rc<MemoryStore>) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run(cli.command.unwrap(), storage.clone(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn add_start_list_round_trip() {
        let storage = Rc::new(MemoryStore::new());
        let report = exec(&["tickdown", "add", "Plank", "90", "-c", "Workout"], &storage);
        assert!(report.starts_with("Added 'Plank'"));

        let id = persist::load_timers(&*storage).unwrap().unwrap()[0].id.clone();
        assert_eq!(exec(&["tickdown", "start", id.as_str()], &storage), "Started 'Plank'.\n");

        let listing = exec(&["tickdown", "list"], &storage);
        assert!(listing.contains("Workout\tPlank\t00:01:30/00:01:30\trunning"));
    }

    #[test]
    fn unknown_id_does_not_dispatch() {
        let storage = Rc::new(MemoryStore::new());
        assert_eq!(
            exec(&["tickdown", "delete", "nope"], &storage),
            "Timer 'nope' not found.\n"
        );
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn theme_subcommand_sets_and_toggles() {
        let storage = Rc::new(MemoryStore::new());
        assert_eq!(exec(&["tickdown", "theme"], &storage), "Theme: light\n");
        assert_eq!(exec(&["tickdown", "theme", "dark"], &storage), "Theme: dark\n");
        assert_eq!(exec(&["tickdown", "theme", "toggle"], &storage), "Theme: light\n");
    }

    #[test]
    fn default_category_is_general() {
        let cli = Cli::try_parse_from(["tickdown", "add", "Tea", "180"]).unwrap();
        match cli.command {
            Some(Command::Add { category, seconds, .. }) => {
                assert_eq!(category, "General");
                assert_eq!(seconds, 180);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn negative_duration_is_rejected_by_the_parser() {
        assert!(Cli::try_parse_from(["tickdown", "add", "Tea", "-5"]).is_err());
    }
}
