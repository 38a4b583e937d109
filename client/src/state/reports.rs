//! Aggregated task statistics for the reports page.
//!
//! DESIGN
//! ======
//! Reports are derived client-side from the task list the server already
//! scopes to the current user; no extra endpoint is involved.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use std::collections::BTreeMap;

use crate::net::types::{Id, Task, TaskStatusKind, UrgencyLevel};

/// Open (non-terminal) task count for one responsible user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponsibleLoad {
    pub user_id: Id,
    pub name: String,
    pub open_tasks: usize,
}

/// Summary of a task list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskReport {
    pub total: usize,
    /// Counts per status in lifecycle order; tasks without any status are in `no_status`.
    pub by_status: Vec<(TaskStatusKind, usize)>,
    pub no_status: usize,
    /// Counts per urgency: known levels in severity order, then others by name.
    pub by_urgency: Vec<(String, usize)>,
    /// Non-terminal tasks whose suggested date is before `today`.
    pub overdue: usize,
    /// Non-terminal tasks with no responsible user.
    pub unassigned: usize,
    /// Busiest responsible first.
    pub workload: Vec<ResponsibleLoad>,
}

impl TaskReport {
    /// Build a report; `today` is an ISO date (`YYYY-MM-DD`).
    pub fn from_tasks(tasks: &[Task], today: &str) -> Self {
        let mut status_counts: BTreeMap<TaskStatusKind, usize> = BTreeMap::new();
        let mut urgency_counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut loads: BTreeMap<Id, ResponsibleLoad> = BTreeMap::new();
        let mut report = Self { total: tasks.len(), ..Self::default() };
        let today = date_part(today);

        for task in tasks {
            let status = task.effective_status();
            match status {
                Some(kind) => *status_counts.entry(kind).or_default() += 1,
                None => report.no_status += 1,
            }
            *urgency_counts.entry(task.urgency_level.clone()).or_default() += 1;

            let active = !status.is_some_and(TaskStatusKind::is_terminal);
            if !active {
                continue;
            }
            if task
                .suggested_date
                .as_deref()
                .is_some_and(|date| date_part(date) < today)
            {
                report.overdue += 1;
            }
            if task.responsibles.is_empty() {
                report.unassigned += 1;
            }
            for user in &task.responsibles {
                loads
                    .entry(user.id)
                    .or_insert_with(|| ResponsibleLoad { user_id: user.id, name: user.name.clone(), open_tasks: 0 })
                    .open_tasks += 1;
            }
        }

        report.by_status = TaskStatusKind::ALL
            .into_iter()
            .filter_map(|kind| status_counts.get(&kind).map(|count| (kind, *count)))
            .collect();
        report.by_urgency = order_urgencies(urgency_counts);
        report.workload = loads.into_values().collect();
        report
            .workload
            .sort_by(|a, b| b.open_tasks.cmp(&a.open_tasks).then_with(|| a.name.cmp(&b.name)));
        report
    }
}

fn order_urgencies(mut counts: BTreeMap<String, usize>) -> Vec<(String, usize)> {
    let mut ordered: Vec<(String, usize)> = UrgencyLevel::ALL
        .into_iter()
        .rev()
        .filter_map(|level| counts.remove_entry(level.as_str()))
        .collect();
    ordered.extend(counts);
    ordered
}

fn date_part(value: &str) -> &str {
    value.get(..10).unwrap_or(value)
}
