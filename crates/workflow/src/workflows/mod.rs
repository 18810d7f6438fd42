mod planner;
mod todos;

pub use planner::TaskPlanner;
pub use todos::{BulkCreation, TodoService};
