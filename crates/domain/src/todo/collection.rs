//! Pure helpers over a collection of todos.
//!
//! Every backend stores the full collection and the service works on a
//! freshly loaded copy, so these functions take plain slices and vectors.

use std::collections::BTreeSet;

use super::entity::Todo;
use super::identifier::{ListIdentifier, TodoIdentifier};
use crate::errors::DomainError;

// =============================================================================
// Identifier Assignment
// =============================================================================

/// Returns `max(id) + 1`, or [`TodoIdentifier::FIRST`] for an empty slice.
///
/// Identifiers are derived from the current contents, so deleting the
/// highest todo makes its identifier available again. Two writers computing
/// this concurrently will hand out the same value.
///
/// # Examples
///
/// ```
/// use listy_domain::{Todo, TodoIdentifier};
/// use listy_domain::todo::collection::next_identifier;
///
/// assert_eq!(next_identifier(&[]), TodoIdentifier::new(1));
///
/// let todos = vec![
///     Todo::new(TodoIdentifier::new(3), "a"),
///     Todo::new(TodoIdentifier::new(7), "b"),
/// ];
/// assert_eq!(next_identifier(&todos), TodoIdentifier::new(8));
/// ```
#[must_use]
pub fn next_identifier(todos: &[Todo]) -> TodoIdentifier {
    todos
        .iter()
        .map(|todo| todo.id)
        .max()
        .map_or(TodoIdentifier::FIRST, |max| max.next())
}

// =============================================================================
// Lookup
// =============================================================================

/// Finds a todo and its position by identifier.
#[must_use]
pub fn find_by_identifier(todos: &[Todo], id: TodoIdentifier) -> Option<(usize, &Todo)> {
    todos.iter().enumerate().find(|(_, todo)| todo.id == id)
}


// =============================================================================
// Mutation
// =============================================================================

/// Applies `change` to the todo with the given identifier and returns a copy
/// of the result.
///
/// # Errors
///
/// Returns [`DomainError::TodoNotFound`] when no todo has that identifier.
pub fn modify_by_identifier<F>(
    todos: &mut [Todo],
    id: TodoIdentifier,
    change: F,
) -> Result<Todo, DomainError>
where
    F: FnOnce(&mut Todo),
{
    let todo = todos
        .iter_mut()
        .find(|todo| todo.id == id)
        .ok_or(DomainError::TodoNotFound(id))?;
    change(todo);
    Ok(todo.clone())
}

/// Removes the todo with the given identifier, preserving the order of the
/// remaining todos.
///
/// # Errors
///
/// Returns [`DomainError::TodoNotFound`] when no todo has that identifier.
pub fn remove_by_identifier(
    todos: &mut Vec<Todo>,
    id: TodoIdentifier,
) -> Result<Todo, DomainError> {
    let (index, _) = find_by_identifier(todos, id).ok_or(DomainError::TodoNotFound(id))?;
    Ok(todos.remove(index))
}

// =============================================================================
// Queries
// =============================================================================

/// Sorts ascending by identifier.
#[must_use]
pub fn sorted_by_identifier(mut todos: Vec<Todo>) -> Vec<Todo> {
    todos.sort_by_key(|todo| todo.id);
    todos
}

#[must_use]
pub fn pending(todos: Vec<Todo>) -> Vec<Todo> {
    todos.into_iter().filter(|todo| !todo.done).collect()
}

#[must_use]
pub fn completed(todos: Vec<Todo>) -> Vec<Todo> {
    todos.into_iter().filter(|todo| todo.done).collect()
}

/// Keeps the todos on one list; `None` keeps the main list only.
#[must_use]
pub fn on_list(todos: Vec<Todo>, list_id: Option<&ListIdentifier>) -> Vec<Todo> {
    todos
        .into_iter()
        .filter(|todo| todo.belongs_to(list_id))
        .collect()
}

/// Distinct non-empty list identifiers in ascending order.
#[must_use]
pub fn distinct_list_identifiers(todos: &[Todo]) -> Vec<ListIdentifier> {
    todos
        .iter()
        .filter_map(|todo| todo.list_id.as_ref())
        .filter(|list_id| !list_id.is_empty())
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
