// Error types for the task store

use thiserror::Error;

/// Failures a status update can return. These are the only errors the store
/// surfaces; persistence problems are logged and swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// No task with the given id exists on the board.
    #[error("task {id} not found")]
    NotFound { id: String },

    /// Another task already holds `in_progress`; at most one may at a time.
    #[error("cannot move task to in_progress: task \"{title}\" is already in progress")]
    Conflict {
        /// Title of the task currently in progress.
        title: String,
    },
}
