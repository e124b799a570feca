// Task store: in-memory board state with JSON persistence and change notification

use crate::error::BoardError;
use crate::task::{CreateTaskInput, CreatedBy, Task, TaskStatus};
use fs2::FileExt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// Directory under the workspace root that holds the board file.
pub const BOARD_DIR: &str = ".kanban";

/// Board file name inside [`BOARD_DIR`].
pub const BOARD_FILE: &str = "board.json";

type Subscriber = Box<dyn Fn(&[Task])>;

/// Single source of truth for all task state.
///
/// Owns the task collection, enforces the in_progress exclusivity rule,
/// persists the whole collection after every mutation, and notifies
/// subscribers with a post-mutation snapshot. Persistence failures are
/// logged and never surfaced to callers; the in-memory collection stays
/// authoritative.
pub struct TaskStore {
    file_path: PathBuf,
    tasks: Vec<Task>,
    subscribers: Vec<Subscriber>,
}

impl TaskStore {
    /// Open the store for the given workspace root, loading any persisted
    /// board from `.kanban/board.json`.
    ///
    /// A missing file yields an empty board; an unreadable or malformed file
    /// is logged and also yields an empty board. Never fails.
    pub fn open<P: AsRef<Path>>(workspace_root: P) -> Self {
        let file_path = workspace_root.as_ref().join(BOARD_DIR).join(BOARD_FILE);
        let tasks = Self::load(&file_path);

        Self {
            file_path,
            tasks,
            subscribers: Vec::new(),
        }
    }

    /// Path of the persisted board file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Register a change subscriber.
    ///
    /// Subscribers run synchronously, in registration order, after every
    /// successful mutation, each receiving the same full-collection snapshot.
    pub fn subscribe<F: Fn(&[Task]) + 'static>(&mut self, callback: F) {
        self.subscribers.push(Box::new(callback));
    }

    /// Create one task per input, all entering at `ready`.
    ///
    /// Titles and order values are accepted as-is; duplicate or negative
    /// orders are not rejected. The whole collection is re-sorted by `order`
    /// ascending afterwards (ties land in unspecified order). Never fails.
    pub fn create_tasks(&mut self, inputs: &[CreateTaskInput]) {
        let new_tasks = inputs.iter().map(|input| Task {
            id: generate_id(),
            title: input.title.clone(),
            status: TaskStatus::Ready,
            order: input.order,
            created_by: CreatedBy::Agent,
        });

        self.tasks.extend(new_tasks);
        self.tasks.sort_unstable_by(|a, b| a.order.total_cmp(&b.order));
        self.save();
        self.notify();
    }

    /// Move a task to a different status (column).
    ///
    /// Any status-to-status transition is allowed except that at most one
    /// task may hold `in_progress` at a time: moving a second task there
    /// fails with [`BoardError::Conflict`] naming the blocking task, and the
    /// target task is left unchanged. Unknown ids fail with
    /// [`BoardError::NotFound`].
    pub fn set_task_status(&mut self, task_id: &str, status: TaskStatus) -> Result<(), BoardError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == task_id)
            .ok_or_else(|| BoardError::NotFound {
                id: task_id.to_string(),
            })?;

        if status == TaskStatus::InProgress {
            if let Some(blocking) = self
                .tasks
                .iter()
                .find(|t| t.status == TaskStatus::InProgress && t.id != task_id)
            {
                return Err(BoardError::Conflict {
                    title: blocking.title.clone(),
                });
            }
        }

        self.tasks[index].status = status;
        self.save();
        self.notify();
        Ok(())
    }

    /// Snapshot of the current collection in its current sort order.
    pub fn get_tasks(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Clear all tasks. Never fails.
    pub fn reset_board(&mut self) {
        self.tasks.clear();
        self.save();
        self.notify();
    }

    fn notify(&self) {
        for subscriber in &self.subscribers {
            subscriber(&self.tasks);
        }
    }

    /// Persist the collection as a pretty-printed JSON array, overwriting the
    /// whole file. All failures are logged and swallowed; the in-memory
    /// collection remains the source of truth.
    fn save(&self) {
        if let Some(dir) = self.file_path.parent() {
            if let Err(e) = fs::create_dir_all(dir) {
                warn!(dir = ?dir, error = ?e, "Failed to create board directory, skipping save");
                return;
            }
        }

        let json = match serde_json::to_string_pretty(&self.tasks) {
            Ok(j) => j,
            Err(e) => {
                warn!(error = ?e, "Failed to serialize board, skipping save");
                return;
            }
        };

        let result = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.file_path)
            .and_then(|mut file| {
                // Exclusive lock so a concurrent reader never sees a torn write
                file.lock_exclusive()?;
                file.write_all(json.as_bytes())?;
                file.sync_all()
            });

        if let Err(e) = result {
            warn!(path = ?self.file_path, error = ?e, "Failed to save board");
        }
    }

    fn load(path: &Path) -> Vec<Task> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = ?path, "No board file, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(path = ?path, error = ?e, "Failed to read board file, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Task>>(&content) {
            Ok(tasks) => {
                debug!(path = ?path, count = tasks.len(), "Loaded board");
                tasks
            }
            Err(e) => {
                warn!(path = ?path, error = ?e, "Malformed board file, starting empty");
                Vec::new()
            }
        }
    }
}

fn generate_id() -> String {
    format!("task-{}", Uuid::now_v7())
}
