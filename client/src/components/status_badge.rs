//! Colored pill for a task status.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::TaskStatusKind;

/// Badge showing a status label; `None` renders as "No status".
#[component]
pub fn StatusBadge(status: Option<TaskStatusKind>) -> impl IntoView {
    view! { <span class=badge_class(status)>{badge_label(status)}</span> }
}

fn badge_class(status: Option<TaskStatusKind>) -> String {
    let modifier = status.map_or("none", |kind| kind.as_str());
    format!("status-badge status-badge--{}", modifier.to_ascii_lowercase())
}

fn badge_label(status: Option<TaskStatusKind>) -> &'static str {
    status.map_or("No status", TaskStatusKind::label)
}
