pub mod ai;
pub mod health;
pub mod lists;
pub mod todos;

pub use ai::{ai_breakdown, ai_create};
pub use health::health_check;
pub use lists::{get_lists, get_todos_by_list};
pub use todos::{
    create_todo, delete_todo, get_completed_todos, get_pending_todos, get_todo, get_todos,
    toggle_todo, update_todo,
};

use listy_domain::TodoIdentifier;

use crate::errors::ApiError;

/// Parses the `{id}` path segment.
pub(crate) fn parse_identifier(raw: &str) -> Result<TodoIdentifier, ApiError> {
    raw.parse().map_err(|_| ApiError::invalid_identifier())
}
