//! Read-only queries over a task snapshot
//!
//! Every function here takes the collection as a slice and hands back a new
//! ordering of borrows. Nothing in this module touches the store.

use super::{Task, TaskPriority, TaskStatus};

/// Case-insensitive substring match on title or description. An empty
/// keyword matches everything.
pub fn search<'a>(tasks: &'a [Task], keyword: &str) -> Vec<&'a Task> {
    let keyword = keyword.to_lowercase();
    tasks
        .iter()
        .filter(|t| {
            keyword.is_empty()
                || t.title.to_lowercase().contains(&keyword)
                || t.description.to_lowercase().contains(&keyword)
        })
        .collect()
}

pub fn filter_by_status(tasks: &[Task], status: TaskStatus) -> Vec<&Task> {
    tasks.iter().filter(|t| t.status == status).collect()
}

pub fn filter_by_priority(tasks: &[Task], priority: TaskPriority) -> Vec<&Task> {
    tasks.iter().filter(|t| t.priority == priority).collect()
}

/// High before medium before low; ties keep collection order.
pub fn sort_by_priority(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by_key(|t| t.priority.rank());
    sorted
}

/// Pending before complete; ties keep collection order.
pub fn sort_by_status(tasks: &[Task]) -> Vec<&Task> {
    let mut sorted: Vec<&Task> = tasks.iter().collect();
    sorted.sort_by_key(|t| t.status.rank());
    sorted
}
