//! Human and JSON output formatting.

use tasklog::{Task, TaskStatus};

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OutputMode {
    /// One-line human output.
    Human,
    /// Pretty-printed JSON.
    Json,
}

/// Render a freshly added task.
pub fn format_added(task: &Task, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("Task added successfully (ID: {})", task.id),
        OutputMode::Json => task_json(task),
    }
}

/// Render an updated task (description or status change).
pub fn format_updated(task: &Task, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("Task updated: {}", format_task(task)),
        OutputMode::Json => task_json(task),
    }
}

/// Render a deletion confirmation.
pub fn format_deleted(id: u64, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => format!("Task {} deleted", id),
        OutputMode::Json => format!("{{\"deleted\": {}}}", id),
    }
}

/// Render a listing.
pub fn format_listing(tasks: &[Task], filter: Option<TaskStatus>, mode: OutputMode) -> String {
    match mode {
        OutputMode::Human => {
            let header = match filter {
                Some(status) => format!("== {} ==", status),
                None => "== All tasks ==".to_string(),
            };
            let mut lines = vec![header];
            lines.extend(tasks.iter().map(format_task));
            lines.push("====".to_string());
            lines.join("\n")
        }
        OutputMode::Json => serde_json::to_string_pretty(tasks)
            .unwrap_or_else(|e| format!("(encode error) {}", e)),
    }
}

/// One task as a single line.
pub fn format_task(task: &Task) -> String {
    format!(
        "{{ID: {} | description: {} | status: {}}}",
        task.id, task.description, status_label(task.status)
    )
}

fn status_label(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "TO DO",
        TaskStatus::InProgress => "IN PROGRESS",
        TaskStatus::Done => "DONE",
    }
}

fn task_json(task: &Task) -> String {
    serde_json::to_string_pretty(task).unwrap_or_else(|e| format!("(encode error) {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklog::TaskStatus;

    fn task(id: u64, description: &str, status: TaskStatus) -> Task {
        Task {
            id,
            description: description.to_string(),
            status,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn human_task_line_carries_id_description_and_status() {
        let line = format_task(&task(3, "water plants", TaskStatus::InProgress));
        assert_eq!(line, "{ID: 3 | description: water plants | status: IN PROGRESS}");
    }

    #[test]
    fn listing_is_bracketed_by_header_and_footer() {
        let tasks = vec![task(1, "a", TaskStatus::Todo)];
        let out = format_listing(&tasks, Some(TaskStatus::Todo), OutputMode::Human);
        assert!(out.starts_with("== todo =="));
        assert!(out.ends_with("===="));
    }

    #[test]
    fn json_listing_is_valid_json() {
        let tasks = vec![task(1, "a", TaskStatus::Done)];
        let out = format_listing(&tasks, None, OutputMode::Json);
        let parsed: Vec<Task> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, tasks);
    }
}
