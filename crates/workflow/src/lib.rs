//! Workflow layer for Listy.
//!
//! This crate defines the ports the service depends on (persistence and task
//! breakdown) and the use cases that run on top of them. Adapters live in
//! `listy-infrastructure`; the HTTP and CLI surfaces drive these workflows.

pub mod errors;
pub mod ports;
pub mod workflows;

pub use errors::{WorkflowError, WorkflowResult};
pub use ports::{TaskBreakdown, TodoStore};
pub use workflows::{BulkCreation, TaskPlanner, TodoService};
