//! Card component for task list items on the dashboard.
//!
//! DESIGN
//! ======
//! Keeps task list presentation in one place and centralizes the detail/edit
//! navigation affordances plus the delete callback.

#[cfg(test)]
#[path = "task_card_test.rs"]
mod task_card_test;

use leptos::prelude::*;

use crate::components::status_badge::StatusBadge;
use crate::net::types::{Id, Task};
use crate::routes::AppRoute;

/// A clickable card representing a task.
#[component]
pub fn TaskCard(task: Task, #[prop(optional)] on_delete: Option<Callback<Id>>) -> impl IntoView {
    let id = task.id;
    let href = AppRoute::TaskDetail(id).path();
    let edit_href = AppRoute::TaskEdit(id).path();
    let status = task.effective_status();
    let equipment = equipment_summary(&task);
    let responsibles = responsible_summary(&task);
    let suggested = task.suggested_date.clone().unwrap_or_else(|| "—".to_owned());

    let on_delete_click = Callback::new(move |()| {
        if let Some(on_delete) = on_delete.as_ref() {
            on_delete.run(id);
        }
    });

    view! {
        <article class="task-card">
            <header class="task-card__header">
                <a class="task-card__name" href=href>{task.name}</a>
                <StatusBadge status=status/>
            </header>
            <p class="task-card__description">{task.description}</p>
            <dl class="task-card__meta">
                <dt>"Urgency"</dt>
                <dd>{task.urgency_level}</dd>
                <dt>"Suggested"</dt>
                <dd>{suggested}</dd>
                <dt>"Equipment"</dt>
                <dd>{equipment}</dd>
                <dt>"Responsible"</dt>
                <dd>{responsibles}</dd>
            </dl>
            <footer class="task-card__actions">
                <a class="btn" href=edit_href>"Edit"</a>
                <button
                    class="btn btn--danger"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        on_delete_click.run(());
                    }
                    title="Delete task"
                >
                    "Delete"
                </button>
            </footer>
        </article>
    }
}

fn equipment_summary(task: &Task) -> String {
    if task.equipments.is_empty() {
        return "—".to_owned();
    }
    task.equipments
        .iter()
        .map(|e| format!("{} ({})", e.name, e.code))
        .collect::<Vec<_>>()
        .join(", ")
}

fn responsible_summary(task: &Task) -> String {
    if task.responsibles.is_empty() {
        return "Unassigned".to_owned();
    }
    task.responsibles
        .iter()
        .map(|u| u.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
