// Board view: column grouping and terminal rendering

use crate::task::{Task, TaskStatus};
use colored::{ColoredString, Colorize};

/// Tasks grouped into the four fixed board columns, each sorted by `order`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardColumns {
    pub ready: Vec<Task>,
    pub in_progress: Vec<Task>,
    pub in_review: Vec<Task>,
    pub done: Vec<Task>,
}

impl BoardColumns {
    /// Bucket a snapshot by status and sort each bucket by `order` ascending.
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut columns = Self::default();
        for task in tasks {
            columns.column_mut(task.status).push(task.clone());
        }
        for status in TaskStatus::ALL {
            columns
                .column_mut(status)
                .sort_unstable_by(|a, b| a.order.total_cmp(&b.order));
        }
        columns
    }

    /// Tasks in the column for the given status.
    pub fn column(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::Ready => &self.ready,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::InReview => &self.in_review,
            TaskStatus::Done => &self.done,
        }
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        match status {
            TaskStatus::Ready => &mut self.ready,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::InReview => &mut self.in_review,
            TaskStatus::Done => &mut self.done,
        }
    }

    pub fn total(&self) -> usize {
        TaskStatus::ALL
            .iter()
            .map(|s| self.column(*s).len())
            .sum()
    }
}

fn column_header(status: TaskStatus, count: usize) -> ColoredString {
    let label = format!("{} ({})", column_title(status), count);
    match status {
        TaskStatus::Ready => label.cyan().bold(),
        TaskStatus::InProgress => label.yellow().bold(),
        TaskStatus::InReview => label.magenta().bold(),
        TaskStatus::Done => label.green().bold(),
    }
}

fn column_title(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Ready => "Ready",
        TaskStatus::InProgress => "In Progress",
        TaskStatus::InReview => "In Review",
        TaskStatus::Done => "Done",
    }
}

/// Render the board as column sections with one card line per task.
pub fn render(columns: &BoardColumns) -> String {
    let mut out = String::new();
    for status in TaskStatus::ALL {
        let tasks = columns.column(status);
        out.push_str(&format!("{}\n", column_header(status, tasks.len())));
        if tasks.is_empty() {
            out.push_str(&format!("  {}\n", "(empty)".dimmed()));
        }
        for task in tasks {
            out.push_str(&format!("  • {}  {}\n", task.title, task.id.dimmed()));
        }
        out.push('\n');
    }
    out
}
