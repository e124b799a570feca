// Agent-facing tool adapter
//
// Four operations mirroring the store API 1:1 for an external tool-calling
// agent. Each has a confirmation preview and an invoke that returns a
// human-readable result message. No business logic lives here beyond
// resolving task ids before delegating.

use crate::store::TaskStore;
use crate::task::{CreateTaskInput, TaskStatus};
use eyre::{Result, bail};
use serde::{Deserialize, Serialize};

/// Arguments for the create-tasks tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTasksArgs {
    pub tasks: Vec<CreateTaskInput>,
}

/// Arguments for the update-task-status tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskArgs {
    pub task_id: String,
    pub status: TaskStatus,
}

/// Confirmation preview for creating tasks.
pub fn create_tasks_preview(args: &CreateTasksArgs) -> String {
    let task_list: Vec<String> = args
        .tasks
        .iter()
        .map(|t| format!("- {} (order: {})", t.title, t.order))
        .collect();
    format!(
        "Create the following {} task(s) on the kanban board?\n{}",
        args.tasks.len(),
        task_list.join("\n")
    )
}

/// Create the given tasks; all enter at `ready`.
pub fn create_tasks_invoke(store: &mut TaskStore, args: &CreateTasksArgs) -> String {
    store.create_tasks(&args.tasks);

    let titles: Vec<&str> = args.tasks.iter().map(|t| t.title.as_str()).collect();
    format!(
        "Created {} task(s) on the kanban board: {}. All tasks are in 'ready' status.",
        args.tasks.len(),
        titles.join(", ")
    )
}

/// Confirmation preview for a status update. Falls back to the raw id when
/// it does not resolve to a task.
pub fn update_task_preview(store: &TaskStore, args: &UpdateTaskArgs) -> String {
    let tasks = store.get_tasks();
    let title = tasks
        .iter()
        .find(|t| t.id == args.task_id)
        .map_or(args.task_id.as_str(), |t| t.title.as_str());
    format!("Update task \"{}\" to status \"{}\"?", title, args.status)
}

/// Update a task's status.
///
/// Resolves the id against a snapshot first so an unknown id produces a
/// descriptive message instead of being forwarded to the store; conflicts
/// surface the blocking task's title.
pub fn update_task_invoke(store: &mut TaskStore, args: &UpdateTaskArgs) -> Result<String> {
    let tasks = store.get_tasks();
    let Some(task) = tasks.iter().find(|t| t.id == args.task_id) else {
        bail!(
            "Task ID \"{}\" not found. Use the get_tasks tool to get valid task IDs.",
            args.task_id
        );
    };
    let previous = task.status;
    let title = task.title.clone();

    store.set_task_status(&args.task_id, args.status)?;

    Ok(format!(
        "Task \"{}\" status updated from \"{}\" to \"{}\".",
        title, previous, args.status
    ))
}

/// List all tasks: per-status counts plus an order-sorted listing.
pub fn get_tasks_invoke(store: &TaskStore) -> String {
    let tasks = store.get_tasks();
    if tasks.is_empty() {
        return "The kanban board is empty. No tasks found.".to_string();
    }

    let count = |status: TaskStatus| tasks.iter().filter(|t| t.status == status).count();

    let mut sorted = tasks.clone();
    sorted.sort_unstable_by(|a, b| a.order.total_cmp(&b.order));
    let listing: Vec<String> = sorted
        .iter()
        .map(|t| format!("- [{}] {} (ID: {}, order: {})", t.status, t.title, t.id, t.order))
        .collect();

    format!(
        "Found {} task(s):\nReady: {}, In Progress: {}, In Review: {}, Done: {}\n\n{}",
        tasks.len(),
        count(TaskStatus::Ready),
        count(TaskStatus::InProgress),
        count(TaskStatus::InReview),
        count(TaskStatus::Done),
        listing.join("\n")
    )
}

/// Confirmation preview for clearing the board.
pub fn reset_board_preview(store: &TaskStore) -> String {
    format!(
        "Clear all {} task(s) from the kanban board?",
        store.get_tasks().len()
    )
}

/// Clear the board, reporting how many tasks were removed.
pub fn reset_board_invoke(store: &mut TaskStore) -> String {
    let removed = store.get_tasks().len();
    store.reset_board();
    format!("Kanban board cleared. Removed {} task(s).", removed)
}
