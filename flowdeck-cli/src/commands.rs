//! Subcommand definitions and dispatch.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use flowdeck_kanban::{
    snapshot, AddCard, AddEvent, Apply, EventKind, MoveCard, Slot, SnapshotStore, ToggleSubtask,
};
use serde_json::Value;
use std::path::PathBuf;

/// Personal task board with a companion calendar
#[derive(Debug, Parser)]
#[command(name = "flowdeck", version, about)]
pub struct Cli {
    /// Data directory for the board and calendar snapshots
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the current board snapshot
    Show,
    /// Add a card to the backlog
    Add {
        /// The card title
        title: String,
        /// Comma-separated subtask labels ("UI, Firebase auth")
        #[arg(long, default_value = "")]
        subtasks: String,
    },
    /// Move a card between slots (omit --to/--to-index for a cancelled drag)
    Move {
        /// The card id
        id: String,
        /// Source column
        #[arg(long)]
        from: String,
        /// Position within the source column
        #[arg(long)]
        from_index: usize,
        /// Destination column
        #[arg(long, requires = "to_index")]
        to: Option<String>,
        /// Insertion position within the destination column
        #[arg(long, requires = "to")]
        to_index: Option<usize>,
    },
    /// Toggle a subtask label on a card
    Toggle {
        /// The card id
        id: String,
        /// The subtask label
        label: String,
        /// The column the card currently sits in
        #[arg(long)]
        column: String,
    },
    /// Calendar commands
    Event {
        #[command(subcommand)]
        command: EventCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum EventCommand {
    /// Add a calendar entry
    Add(AddEventArgs),
    /// Print the calendar event list
    List,
}

#[derive(Debug, Args)]
pub struct AddEventArgs {
    /// The event title
    pub title: String,
    /// The calendar day, YYYY-MM-DD
    #[arg(long)]
    pub date: NaiveDate,
    /// Event kind: task or deadline
    #[arg(long, default_value = "task")]
    pub kind: String,
}

/// Resolve the store location: `--data-dir`, or `flowdeck/` under the
/// platform data directory, or `.flowdeck` in the working directory.
fn resolve_store(data_dir: Option<PathBuf>) -> SnapshotStore {
    let root = data_dir
        .or_else(|| dirs::data_dir().map(|d| d.join("flowdeck")))
        .unwrap_or_else(|| PathBuf::from(".flowdeck"));
    SnapshotStore::new(root)
}

pub fn run(cli: Cli) -> Result<()> {
    let store = resolve_store(cli.data_dir);
    let _lock = store.lock().context("failed to lock the data directory")?;

    match cli.command {
        Command::Show => {
            let board = store.load_board()?;
            println!("{}", snapshot::encode(&board)?);
        }
        Command::Add { title, subtasks } => {
            let result = mutate_board(&store, AddCard::new(title).with_subtask_text(&subtasks))?;
            print_result(&result);
        }
        Command::Move {
            id,
            from,
            from_index,
            to,
            to_index,
        } => {
            let mut op = MoveCard::new(id.as_str(), Slot::new(from.as_str(), from_index));
            if let (Some(to), Some(to_index)) = (to, to_index) {
                op = op.with_destination(Slot::new(to.as_str(), to_index));
            }
            let result = mutate_board(&store, op)?;
            print_result(&result);
        }
        Command::Toggle { id, label, column } => {
            let result = mutate_board(
                &store,
                ToggleSubtask::new(id.as_str(), label, column.as_str()),
            )?;
            print_result(&result);
        }
        Command::Event { command } => match command {
            EventCommand::Add(args) => {
                let kind: EventKind = args.kind.parse()?;
                let mut events = store.load_events()?;
                let event = AddEvent::new(args.title, args.date, kind)
                    .apply(&mut events, Local::now().date_naive())?;
                store.save_events(&events)?;
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
            EventCommand::List => {
                let events = store.load_events()?;
                println!("{}", serde_json::to_string_pretty(&events)?);
            }
        },
    }

    Ok(())
}

/// Load, apply one operation, persist, and return the engine's outcome.
fn mutate_board(store: &SnapshotStore, op: impl Apply) -> Result<Value> {
    let mut board = store.load_board()?;
    let result = op.apply(&mut board)?;
    store.save_board(&board)?;
    Ok(result)
}

fn print_result(result: &Value) {
    match serde_json::to_string_pretty(result) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{result}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_move_requires_paired_destination_flags() {
        let result = Cli::try_parse_from([
            "flowdeck", "move", "01ABC", "--from", "todo", "--from-index", "0", "--to", "completed",
        ]);
        assert!(result.is_err());

        let cli = Cli::try_parse_from([
            "flowdeck", "move", "01ABC", "--from", "todo", "--from-index", "0", "--to",
            "completed", "--to-index", "0",
        ])
        .unwrap();
        match cli.command {
            Command::Move { to, to_index, .. } => {
                assert_eq!(to.as_deref(), Some("completed"));
                assert_eq!(to_index, Some(0));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_event_add_parses_date() {
        let cli = Cli::try_parse_from([
            "flowdeck", "event", "add", "Pay rent", "--date", "2026-01-01", "--kind", "deadline",
        ])
        .unwrap();
        match cli.command {
            Command::Event {
                command: EventCommand::Add(args),
            } => {
                assert_eq!(args.title, "Pay rent");
                assert_eq!(args.date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
                assert_eq!(args.kind, "deadline");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
