//! Task detail page: fields, status history, and the status update form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Status updates are posted with `create_task_status_with_images`, which
//! creates the event first and then uploads each selected file against the
//! new event id. The task is re-fetched afterwards so the history reflects
//! the server's ordering and image URLs.

#[cfg(test)]
#[path = "task_detail_test.rs"]
mod task_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::status_badge::StatusBadge;
use crate::components::toolbar::Toolbar;
use crate::net::types::{Id, Task, TaskStatus, TaskStatusKind, TaskStatusPayload};
use crate::routes::{AppRoute, GuardDecision, parse_id_param};
use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

fn build_status_payload(
    task: Id,
    status: &str,
    comment: &str,
    user: Option<Id>,
) -> Result<TaskStatusPayload, &'static str> {
    let status = TaskStatusKind::parse(status).ok_or("Choose a status.")?;
    let comment = comment.trim();
    Ok(TaskStatusPayload {
        status,
        comment: (!comment.is_empty()).then(|| comment.to_owned()),
        task,
        user,
    })
}

/// Resolve a possibly server-relative media path against the API origin.
fn image_url(api_base: &str, image: &str) -> String {
    if image.starts_with("http://") || image.starts_with("https://") {
        return image.to_owned();
    }
    let origin = api_base
        .find("://")
        .and_then(|scheme| api_base[scheme + 3..].find('/').map(|slash| &api_base[..scheme + 3 + slash]))
        .unwrap_or(api_base);
    if image.starts_with('/') {
        format!("{origin}{image}")
    } else {
        format!("{origin}/{image}")
    }
}

/// Task id from the required `:id` segment; a missing segment is rejected.
fn detail_id(raw: Option<&str>) -> Result<Id, String> {
    parse_id_param(raw.unwrap_or_default())
}

fn status_author(entry: &TaskStatus) -> String {
    entry.user_detail.as_ref().map_or_else(
        || entry.user.map_or_else(|| "Unknown".to_owned(), |id| format!("User #{id}")),
        |user| user.name.clone(),
    )
}

#[component]
pub fn TaskDetailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let parsed = detail_id(params.read_untracked().get("id").as_deref());
    let task_id = parsed.as_ref().ok().copied();
    // Every task route carries technician meta, so a rejected id guards like the list.
    let decision = install_route_guard(task_id.map_or(AppRoute::Dashboard, AppRoute::TaskDetail), auth, use_navigate());

    let task = RwSignal::new(None::<Task>);
    let error = RwSignal::new(parsed.err().map(|raw| format!("Invalid task id: {raw:?}")));
    let status_value = RwSignal::new(TaskStatusKind::Ongoing.as_str().to_owned());
    let comment = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let file_input = NodeRef::<leptos::html::Input>::new();

    let requested = RwSignal::new(false);
    Effect::new(move || {
        let Some(id) = task_id else {
            return;
        };
        if requested.get() || decision.get() != GuardDecision::Allow {
            return;
        }
        requested.set(true);
        load_task(id, task, error);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(task_id) = task_id else {
            return;
        };
        if busy.get() {
            return;
        }
        let user = auth.get_untracked().user.map(|u| u.id);
        let payload = match build_status_payload(task_id, &status_value.get(), &comment.get(), user) {
            Ok(payload) => payload,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Posting update...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let files = selected_files(file_input);
            leptos::task::spawn_local(async move {
                match crate::net::api::create_task_status_with_images(&payload, &files).await {
                    Ok(status) => {
                        log::info!("posted status {} with {} image(s)", status.id, status.images.len());
                        comment.set(String::new());
                        if let Some(input) = file_input.get_untracked() {
                            input.set_value("");
                        }
                        info.set(String::new());
                        load_task(task_id, task, error);
                    }
                    Err(e) => info.set(format!("Could not post update: {}", e.user_message())),
                }
                busy.set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, file_input);
        }
    };

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=|| view! { <div class="task-detail-page"><p>"Loading..."</p></div> }
        >
            <div class="task-detail-page">
                <Toolbar title="Task"/>
                <Show when=move || error.get().is_some()>
                    <p class="task-detail-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || task.get().map(|t| view! { <TaskSummary task=t/> })}

                <Show when=move || task_id.is_some()>
                    <form class="status-form" on:submit=on_submit>
                        <h2>"Post update"</h2>
                        <select
                            class="status-form__status"
                            prop:value=move || status_value.get()
                            on:change=move |ev| status_value.set(event_target_value(&ev))
                        >
                            {TaskStatusKind::ALL
                                .into_iter()
                                .map(|kind| view! { <option value=kind.as_str()>{kind.label()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <textarea
                            class="status-form__comment"
                            placeholder="Comment (optional)"
                            prop:value=move || comment.get()
                            on:input=move |ev| comment.set(event_target_value(&ev))
                        ></textarea>
                        <input class="status-form__files" type="file" accept="image/*" multiple node_ref=file_input/>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Post"
                        </button>
                        <Show when=move || !info.get().is_empty()>
                            <p class="status-form__message">{move || info.get()}</p>
                        </Show>
                    </form>
                </Show>

                <section class="status-history">
                    <h2>"History"</h2>
                    {move || {
                        task.get()
                            .map(|t| t.history_newest_first())
                            .unwrap_or_default()
                            .into_iter()
                            .map(|entry| view! { <StatusEntry entry=entry/> })
                            .collect::<Vec<_>>()
                    }}
                </section>
            </div>
        </Show>
    }
}

#[component]
fn TaskSummary(task: Task) -> impl IntoView {
    let status = task.effective_status();
    let edit_href = AppRoute::TaskEdit(task.id).path();
    let creator = task.creator.as_ref().map_or_else(|| "—".to_owned(), |u| u.name.clone());
    let suggested = task.suggested_date.clone().unwrap_or_else(|| "—".to_owned());

    view! {
        <section class="task-summary">
            <header class="task-summary__header">
                <h1>{task.name.clone()}</h1>
                <StatusBadge status=status/>
                <a class="btn" href=edit_href>"Edit"</a>
            </header>
            <p class="task-summary__description">{task.description.clone()}</p>
            <dl class="task-summary__meta">
                <dt>"Urgency"</dt>
                <dd>{task.urgency_level.clone()}</dd>
                <dt>"Created"</dt>
                <dd>{task.creation_date.clone()}</dd>
                <dt>"Suggested"</dt>
                <dd>{suggested}</dd>
                <dt>"Creator"</dt>
                <dd>{creator}</dd>
            </dl>
            <h2>"Equipment"</h2>
            <ul class="task-summary__list">
                {task
                    .equipments
                    .into_iter()
                    .map(|e| {
                        let place = e.environment.map(|env| env.name).unwrap_or_default();
                        view! { <li>{format!("{} ({})", e.name, e.code)} <span class="muted">{place}</span></li> }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <h2>"Responsibles"</h2>
            <ul class="task-summary__list">
                {task
                    .responsibles
                    .into_iter()
                    .map(|u| view! { <li>{u.name}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}

#[component]
fn StatusEntry(entry: TaskStatus) -> impl IntoView {
    let author = status_author(&entry);
    let base = crate::config::api_base_url();
    let images = entry
        .images
        .iter()
        .map(|img| image_url(&base, &img.image))
        .collect::<Vec<_>>();

    view! {
        <article class="status-entry">
            <header class="status-entry__header">
                <StatusBadge status=Some(entry.status)/>
                <span class="status-entry__date">{entry.status_date}</span>
                <span class="status-entry__author">{author}</span>
            </header>
            {entry.comment.map(|c| view! { <p class="status-entry__comment">{c}</p> })}
            <div class="status-entry__images">
                {images
                    .into_iter()
                    .map(|src| {
                        let href = src.clone();
                        view! { <a href=href target="_blank"><img src=src alt="Status attachment"/></a> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </article>
    }
}

fn load_task(id: Id, task: RwSignal<Option<Task>>, error: RwSignal<Option<String>>) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::get_task(id).await {
            Ok(loaded) => {
                error.set(None);
                task.set(Some(loaded));
            }
            Err(e) => error.set(Some(format!("Could not load task: {}", e.user_message()))),
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, task, error);
    }
}

#[cfg(feature = "hydrate")]
fn selected_files(input: NodeRef<leptos::html::Input>) -> Vec<web_sys::File> {
    let Some(list) = input.get_untracked().and_then(|el| el.files()) else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
