//! Plain-text rendering of todos for the terminal.

use std::fmt::Write as _;

use listy_domain::{AiTask, Todo};

/// One line per todo: `[x] 3: Book flights @travel (priority: high)`.
#[must_use]
pub fn todo_line(todo: &Todo) -> String {
    let mark = if todo.done { 'x' } else { ' ' };
    let mut line = format!("[{mark}] {}: {}", todo.id, todo.item);
    if let Some(list_id) = &todo.list_id {
        let _ = write!(line, " @{list_id}");
    }
    let details = details(
        todo.priority.as_deref(),
        todo.estimated_time.as_deref(),
        todo.category.as_deref(),
    );
    if !details.is_empty() {
        let _ = write!(line, " ({details})");
    }
    line
}

/// Numbered suggestion line: `  2. Send invites (priority: low)`.
#[must_use]
pub fn task_line(position: usize, task: &AiTask) -> String {
    let details = details(
        task.priority.as_deref(),
        task.estimated_time.as_deref(),
        task.category.as_deref(),
    );
    if details.is_empty() {
        format!("  {position}. {}", task.text)
    } else {
        format!("  {position}. {} ({details})", task.text)
    }
}

fn details(priority: Option<&str>, estimated_time: Option<&str>, category: Option<&str>) -> String {
    [
        priority.map(|value| format!("priority: {value}")),
        estimated_time.map(|value| format!("estimate: {value}")),
        category.map(|value| format!("category: {value}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(", ")
}
