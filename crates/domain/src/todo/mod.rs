//! The todo aggregate and everything needed to create and change it.

pub mod collection;
mod entity;
mod identifier;
mod patch;
mod request;

pub use entity::Todo;
pub use identifier::{ListIdentifier, MAIN_LIST, TodoIdentifier};
pub use patch::Patch;
pub use request::{NewTodo, TodoPatch};
