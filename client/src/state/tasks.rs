//! Task-list state for the dashboard.
//!
//! DESIGN
//! ======
//! The list is fetched over REST and kept alongside its filter so the
//! dashboard re-renders from one signal; filtering itself is pure.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use crate::net::types::{Id, Task, TaskStatusKind};

/// Dashboard filter: a status (or "no status") plus free-text search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: StatusFilter,
    pub search: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Hide finished and cancelled tasks.
    Active,
    Only(TaskStatusKind),
}

impl StatusFilter {
    /// Value used by the `<select>` element.
    pub fn as_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Only(kind) => kind.as_str(),
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "active" => Self::Active,
            other => TaskStatusKind::parse(other).map_or(Self::All, Self::Only),
        }
    }

    fn matches(self, status: Option<TaskStatusKind>) -> bool {
        match self {
            Self::All => true,
            Self::Active => !status.is_some_and(TaskStatusKind::is_terminal),
            Self::Only(kind) => status == Some(kind),
        }
    }
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        if !self.status.matches(task.effective_status()) {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        task.name.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
            || task
                .equipments
                .iter()
                .any(|e| e.name.to_lowercase().contains(&needle) || e.code.to_lowercase().contains(&needle))
    }
}

/// Shared task list state backed by `GET /task/`.
#[derive(Clone, Debug, Default)]
pub struct TasksState {
    pub items: Vec<Task>,
    pub loading: bool,
    pub error: Option<String>,
    pub filter: TaskFilter,
}

impl TasksState {
    /// Tasks passing the current filter, in server order.
    pub fn visible(&self) -> Vec<Task> {
        self.items
            .iter()
            .filter(|task| self.filter.matches(task))
            .cloned()
            .collect()
    }

    /// Drop a task locally after a successful delete.
    pub fn remove(&mut self, id: Id) {
        self.items.retain(|task| task.id != id);
    }
}
