//! Domain layer for Listy.
//!
//! This crate contains the todo entity, its value objects, request shapes
//! and the pure collection helpers shared by every backend. Nothing in here
//! performs I/O.

pub mod ai;
pub mod errors;
pub mod todo;

pub use ai::AiTask;
pub use errors::{DomainError, ValidationError};
pub use todo::{ListIdentifier, MAIN_LIST, NewTodo, Patch, Todo, TodoIdentifier, TodoPatch};
