//! Dashboard page listing tasks with filter, open, edit and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the technician landing route. It loads the task list over REST
//! once the guard allows rendering and keeps it in a page-scoped
//! `RwSignal<TasksState>`.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::task_card::TaskCard;
use crate::components::toolbar::Toolbar;
use crate::net::types::{Id, TaskStatusKind};
use crate::routes::{AppRoute, GuardDecision};
use crate::state::auth::AuthState;
use crate::state::tasks::{StatusFilter, TasksState};
use crate::util::auth::install_route_guard;

/// Task list with status/search filters and a delete confirmation.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = install_route_guard(AppRoute::Dashboard, auth, use_navigate());
    let tasks = RwSignal::new(TasksState::default());
    let delete_task_id = RwSignal::new(None::<Id>);

    let requested_list = RwSignal::new(false);
    Effect::new(move || {
        if requested_list.get() || decision.get() != GuardDecision::Allow {
            return;
        }
        requested_list.set(true);
        load_tasks(tasks);
    });

    let on_delete_cancel = Callback::new(move |()| delete_task_id.set(None));
    let on_delete_request = Callback::new(move |id: Id| delete_task_id.set(Some(id)));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <Toolbar title="Tasks"/>

                <div class="dashboard-page__filters">
                    <select
                        class="dashboard-page__status"
                        prop:value=move || tasks.get().filter.status.as_value()
                        on:change=move |ev| {
                            let status = StatusFilter::from_value(&event_target_value(&ev));
                            tasks.update(|s| s.filter.status = status);
                        }
                    >
                        <option value="all">"All statuses"</option>
                        <option value="active">"Active only"</option>
                        {TaskStatusKind::ALL
                            .into_iter()
                            .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <input
                        class="dashboard-page__search"
                        type="search"
                        placeholder="Search tasks or equipment"
                        prop:value=move || tasks.get().filter.search
                        on:input=move |ev| {
                            let search = event_target_value(&ev);
                            tasks.update(|s| s.filter.search = search);
                        }
                    />
                    <button class="btn" on:click=move |_| load_tasks(tasks)>"Refresh"</button>
                </div>

                <p class="dashboard-page__count">
                    {move || {
                        let state = tasks.get();
                        count_label(state.visible().len(), state.items.len())
                    }}
                </p>

                <div class="dashboard-page__grid">
                    <Show when=move || tasks.get().error.is_some()>
                        <p class="dashboard-page__error">{move || tasks.get().error.unwrap_or_default()}</p>
                    </Show>
                    <Show
                        when=move || !tasks.get().loading
                        fallback=move || view! { <p>"Loading tasks..."</p> }
                    >
                        <div class="dashboard-page__cards">
                            {move || {
                                let visible = tasks.get().visible();
                                if visible.is_empty() {
                                    return view! { <p class="dashboard-page__empty">"No tasks match."</p> }
                                        .into_any();
                                }
                                visible
                                    .into_iter()
                                    .map(|task| view! { <TaskCard task=task on_delete=on_delete_request/> })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }}
                        </div>
                    </Show>
                </div>
                <Show when=move || delete_task_id.get().is_some()>
                    <DeleteTaskDialog task_id=delete_task_id on_cancel=on_delete_cancel tasks=tasks/>
                </Show>
            </div>
        </Show>
    }
}

/// Summary line above the card grid.
fn count_label(visible: usize, total: usize) -> String {
    let noun = if total == 1 { "task" } else { "tasks" };
    if visible == total {
        format!("{total} {noun}")
    } else {
        format!("Showing {visible} of {total} {noun}")
    }
}

/// Fetch `/task/` into `tasks`, replacing the current list.
fn load_tasks(tasks: RwSignal<TasksState>) {
    tasks.update(|s| {
        s.loading = true;
        s.error = None;
    });
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get_tasks().await {
            Ok(items) => tasks.update(|s| {
                s.items = items;
                s.loading = false;
            }),
            Err(e) => tasks.update(|s| {
                s.error = Some(format!("Could not load tasks: {}", e.user_message()));
                s.loading = false;
            }),
        }
    });
}

#[component]
fn DeleteTaskDialog(
    task_id: RwSignal<Option<Id>>,
    on_cancel: Callback<()>,
    tasks: RwSignal<TasksState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = task_id.get_untracked() else {
            return;
        };
        on_cancel.run(());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_task(id).await {
                Ok(()) => tasks.update(|s| s.remove(id)),
                Err(e) => tasks.update(|s| s.error = Some(format!("Could not delete task: {}", e.user_message()))),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, tasks);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Task"</h2>
                <p class="dialog__danger">"This will permanently delete this task and its status history."</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
