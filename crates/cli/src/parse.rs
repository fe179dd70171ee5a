//! ArgMatches → typed command conversion.

use clap::ArgMatches;
use tasklog::TaskStatus;

/// A fully parsed command, ready to run against the task layer.
#[derive(Debug, PartialEq)]
pub enum CliCommand {
    /// Add a task.
    Add { description: String },
    /// Replace a task's description.
    Update { id: u64, description: String },
    /// Delete a task.
    Delete { id: u64 },
    /// Move a task to a new status.
    SetStatus { id: u64, status: TaskStatus },
    /// List tasks, optionally filtered by status.
    List { filter: Option<TaskStatus> },
}

/// Convert clap's parsed arguments into a [`CliCommand`].
pub fn matches_to_command(matches: &ArgMatches) -> Result<CliCommand, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "add" => Ok(CliCommand::Add {
            description: arg_string(m, "description"),
        }),
        "update" => Ok(CliCommand::Update {
            id: arg_id(m),
            description: arg_string(m, "description"),
        }),
        "delete" => Ok(CliCommand::Delete { id: arg_id(m) }),
        "mark-in-progress" => Ok(CliCommand::SetStatus {
            id: arg_id(m),
            status: TaskStatus::InProgress,
        }),
        "mark-done" => Ok(CliCommand::SetStatus {
            id: arg_id(m),
            status: TaskStatus::Done,
        }),
        "list" => {
            let filter = m
                .get_one::<String>("status")
                .map(|s| s.parse::<TaskStatus>())
                .transpose()
                .map_err(|e| e.to_string())?;
            Ok(CliCommand::List { filter })
        }
        other => Err(format!("Unknown command: {}", other)),
    }
}

// clap enforces presence and the u64 syntax; missing values here would be a
// mismatch between commands.rs and this file.
fn arg_string(m: &ArgMatches, name: &str) -> String {
    m.get_one::<String>(name).cloned().unwrap_or_default()
}

fn arg_id(m: &ArgMatches) -> u64 {
    m.get_one::<u64>("id").copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::build_cli;

    fn parse(args: &[&str]) -> Result<CliCommand, String> {
        let matches = build_cli()
            .try_get_matches_from(args)
            .map_err(|e| e.to_string())?;
        matches_to_command(&matches)
    }

    #[test]
    fn add_parses_description() {
        assert_eq!(
            parse(&["tasklog", "add", "buy milk"]).unwrap(),
            CliCommand::Add {
                description: "buy milk".to_string()
            }
        );
    }

    #[test]
    fn update_parses_id_and_description() {
        assert_eq!(
            parse(&["tasklog", "update", "3", "buy oat milk"]).unwrap(),
            CliCommand::Update {
                id: 3,
                description: "buy oat milk".to_string()
            }
        );
    }

    #[test]
    fn mark_verbs_map_to_their_status() {
        assert_eq!(
            parse(&["tasklog", "mark-in-progress", "2"]).unwrap(),
            CliCommand::SetStatus {
                id: 2,
                status: TaskStatus::InProgress
            }
        );
        assert_eq!(
            parse(&["tasklog", "mark-done", "2"]).unwrap(),
            CliCommand::SetStatus {
                id: 2,
                status: TaskStatus::Done
            }
        );
    }

    #[test]
    fn list_accepts_optional_status() {
        assert_eq!(
            parse(&["tasklog", "list"]).unwrap(),
            CliCommand::List { filter: None }
        );
        assert_eq!(
            parse(&["tasklog", "list", "done"]).unwrap(),
            CliCommand::List {
                filter: Some(TaskStatus::Done)
            }
        );
    }

    #[test]
    fn bad_arity_and_vocabulary_are_rejected_at_parse_time() {
        assert!(parse(&["tasklog", "add"]).is_err());
        assert!(parse(&["tasklog", "delete", "not-a-number"]).is_err());
        assert!(parse(&["tasklog", "list", "paused"]).is_err());
    }
}
