//! tasklog CLI — track tasks in a single JSON file.
//!
//! `tasklog [--db PATH] [--json] COMMAND` parses one command, runs it
//! against the task layer, prints the result, and exits (non-zero on
//! error).

mod commands;
mod format;
mod parse;

use std::process;

use tasklog::Tasks;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_added, format_deleted, format_listing, format_updated, OutputMode};
use parse::{matches_to_command, CliCommand};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let matches = build_cli().get_matches();

    let mode = if matches.get_flag("json") {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    // The path goes to the store verbatim; a path without .json surfaces
    // the store's invalid-path error rather than being patched up here.
    let db_path = matches
        .get_one::<String>("db")
        .cloned()
        .unwrap_or_default();
    let tasks = Tasks::new(db_path);

    let command = match matches_to_command(&matches) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("(error) {}", e);
            process::exit(1);
        }
    };

    process::exit(run(&tasks, command, mode));
}

fn run(tasks: &Tasks, command: CliCommand, mode: OutputMode) -> i32 {
    let outcome = match command {
        CliCommand::Add { description } => tasks
            .add(&description)
            .map(|task| format_added(&task, mode)),
        CliCommand::Update { id, description } => tasks
            .update(id, &description)
            .map(|task| format_updated(&task, mode)),
        CliCommand::Delete { id } => tasks.delete(id).map(|()| format_deleted(id, mode)),
        CliCommand::SetStatus { id, status } => tasks
            .set_status(id, status)
            .map(|task| format_updated(&task, mode)),
        CliCommand::List { filter } => tasks
            .list(filter)
            .map(|listing| format_listing(&listing, filter, mode)),
    };

    match outcome {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
