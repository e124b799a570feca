// kanban-agent - Agent-driven kanban task board with JSON persistence

pub mod error;
pub mod store;
pub mod task;
pub mod tools;
pub mod view;

// Re-export main types for convenience
pub use error::BoardError;
pub use store::{BOARD_DIR, BOARD_FILE, TaskStore};
pub use task::{CreateTaskInput, CreatedBy, Task, TaskStatus};
pub use view::BoardColumns;
