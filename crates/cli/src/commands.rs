//! clap command tree for the tasklog binary.

use clap::{Arg, ArgAction, Command};

/// Build the full command tree.
pub fn build_cli() -> Command {
    Command::new("tasklog")
        .about("Track tasks in a single JSON file")
        .arg_required_else_help(true)
        .arg(
            Arg::new("db")
                .long("db")
                .value_name("PATH")
                .global(true)
                .default_value("db.json")
                .help("Path to the task file (must contain .json)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit JSON instead of human-readable output"),
        )
        .subcommand(
            Command::new("add").about("Add a new task").arg(
                Arg::new("description")
                    .value_name("DESCRIPTION")
                    .required(true),
            ),
        )
        .subcommand(
            Command::new("update")
                .about("Replace a task's description")
                .arg(id_arg())
                .arg(
                    Arg::new("description")
                        .value_name("DESCRIPTION")
                        .required(true),
                ),
        )
        .subcommand(Command::new("delete").about("Delete a task").arg(id_arg()))
        .subcommand(
            Command::new("mark-in-progress")
                .about("Mark a task as in progress")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("mark-done")
                .about("Mark a task as done")
                .arg(id_arg()),
        )
        .subcommand(
            Command::new("list").about("List tasks, optionally by status").arg(
                Arg::new("status")
                    .value_name("STATUS")
                    .value_parser(["todo", "in-progress", "done"])
                    .required(false),
            ),
        )
}

fn id_arg() -> Arg {
    Arg::new("id")
        .value_name("ID")
        .required(true)
        .value_parser(clap::value_parser!(u64))
}
