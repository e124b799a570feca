// Data model for the kanban board

use serde::{Deserialize, Serialize};

/// A unit of work on the board.
///
/// Serialized with camelCase keys; the persisted file is a JSON array of
/// these objects and nothing else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub status: TaskStatus,
    pub order: f64,
    pub created_by: CreatedBy,
}

/// Task status, one per board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Ready,
    InProgress,
    InReview,
    Done,
}

impl TaskStatus {
    /// All statuses in column order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Ready,
        TaskStatus::InProgress,
        TaskStatus::InReview,
        TaskStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Ready => "ready",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::InReview => "in_review",
            TaskStatus::Done => "done",
        }
    }
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ready" => Ok(TaskStatus::Ready),
            "in_progress" => Ok(TaskStatus::InProgress),
            "in_review" => Ok(TaskStatus::InReview),
            "done" => Ok(TaskStatus::Done),
            other => Err(format!(
                "unknown status '{}' (expected ready, in_progress, in_review, or done)",
                other
            )),
        }
    }
}

/// Provenance tag. Every task on this board is agent-created; the tag is
/// persisted for audit only and nothing branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CreatedBy {
    Agent,
}

/// Input for creating a task: title plus its sort position on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskInput {
    pub title: String,
    pub order: f64,
}
