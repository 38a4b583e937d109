//! Task create/edit page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at both `/task/new` and `/task/edit/:id`. The presence of the
//! `id` route param selects edit mode, which loads the task and pre-fills the
//! form from its write payload. Equipment and user lists come from the REST
//! lookups and render as checkbox groups.

#[cfg(test)]
#[path = "task_form_test.rs"]
mod task_form_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::toolbar::Toolbar;
use crate::net::types::{CustomUser, Equipment, Id, TaskPayload, UrgencyLevel};
use crate::routes::{AppRoute, GuardDecision, parse_id_param};
use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

/// Editable form values. Relation fields hold selected ids.
#[derive(Clone, Debug, PartialEq, Eq)]
struct TaskForm {
    name: String,
    description: String,
    suggested_date: String,
    urgency_level: String,
    creator: Option<Id>,
    equipments: Vec<Id>,
    responsibles: Vec<Id>,
}

impl Default for TaskForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            suggested_date: String::new(),
            urgency_level: UrgencyLevel::Low.as_str().to_owned(),
            creator: None,
            equipments: Vec::new(),
            responsibles: Vec::new(),
        }
    }
}

impl TaskForm {
    fn from_payload(payload: TaskPayload) -> Self {
        Self {
            name: payload.name,
            description: payload.description,
            suggested_date: payload.suggested_date.unwrap_or_default(),
            urgency_level: payload.urgency_level,
            creator: payload.creator,
            equipments: payload.equipments,
            responsibles: payload.responsibles,
        }
    }
}

/// Add `id` if absent, remove it if present.
fn toggle_id(ids: &mut Vec<Id>, id: Id) {
    if let Some(pos) = ids.iter().position(|x| *x == id) {
        ids.remove(pos);
    } else {
        ids.push(id);
    }
}

/// `YYYY-MM-DD`, as produced by `<input type="date">`.
fn is_iso_date(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() })
}

/// Validate the form and build the write payload.
///
/// `creator` fills in the creator only when the form has none, so editing
/// never reassigns an existing task's creator.
fn validate_task_form(form: &TaskForm, creator: Option<Id>) -> Result<TaskPayload, &'static str> {
    let name = form.name.trim();
    if name.is_empty() {
        return Err("Task name is required.");
    }
    let urgency = form.urgency_level.trim();
    if urgency.is_empty() {
        return Err("Choose an urgency level.");
    }
    let date = form.suggested_date.trim();
    if !date.is_empty() && !is_iso_date(date) {
        return Err("Suggested date must be YYYY-MM-DD.");
    }
    Ok(TaskPayload {
        name: name.to_owned(),
        description: form.description.trim().to_owned(),
        suggested_date: (!date.is_empty()).then(|| date.to_owned()),
        urgency_level: urgency.to_owned(),
        creator: form.creator.or(creator),
        equipments: form.equipments.clone(),
        responsibles: form.responsibles.clone(),
    })
}

/// Id of a freshly created task from the write serializer's response.
fn created_task_id(body: &serde_json::Value) -> Option<Id> {
    body.get("id").and_then(serde_json::Value::as_i64)
}

/// Form mode from the optional `:id` segment: no segment creates, a valid
/// one edits, anything else is rejected instead of falling back to create.
fn form_mode(raw: Option<&str>) -> Result<Option<Id>, String> {
    raw.map(parse_id_param).transpose()
}

/// Where to go after a successful save.
fn saved_target(edit_id: Option<Id>, created: Option<Id>) -> String {
    edit_id
        .or(created)
        .map_or_else(|| AppRoute::Dashboard.path(), |id| AppRoute::TaskDetail(id).path())
}

#[component]
pub fn TaskFormPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let params = use_params_map();
    let mode = form_mode(params.read_untracked().get("id").as_deref());
    let invalid_id = mode.as_ref().err().cloned();
    let valid = invalid_id.is_none();
    let edit_id = mode.unwrap_or_default();
    let route = edit_id.map_or(AppRoute::TaskCreate, AppRoute::TaskEdit);
    let navigate = use_navigate();
    let decision = install_route_guard(route, auth, navigate.clone());

    let form = RwSignal::new(TaskForm::default());
    let equipments = RwSignal::new(Vec::<Equipment>::new());
    let users = RwSignal::new(Vec::<CustomUser>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(target) = saved.get() {
            navigate(&target, NavigateOptions::default());
        }
    });

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if !valid || requested.get() || decision.get() != GuardDecision::Allow {
            return;
        }
        requested.set(true);
        load_form_data(edit_id, form, equipments, users, info);
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !valid || busy.get() {
            return;
        }
        let creator = auth.get_untracked().user.map(|u| u.id);
        let payload = match validate_task_form(&form.get(), creator) {
            Ok(payload) => payload,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match edit_id {
                Some(id) => crate::net::api::update_task(id, &payload).await,
                None => crate::net::api::create_task(&payload).await,
            };
            match result {
                Ok(body) => {
                    info.set(String::new());
                    saved.set(Some(saved_target(edit_id, created_task_id(&body))));
                }
                Err(e) => info.set(format!("Could not save task: {}", e.user_message())),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, saved);
        }
    };

    let title = if edit_id.is_some() || !valid { "Edit Task" } else { "New Task" };

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=|| view! { <div class="task-form-page"><p>"Loading..."</p></div> }
        >
            <div class="task-form-page">
                <Toolbar title=title/>
                {invalid_id
                    .clone()
                    .map(|raw| view! { <p class="task-form__message">{format!("Invalid task id: {raw:?}")}</p> })}
                <Show when=move || valid>
                    <form class="task-form" on:submit=on_submit>
                        <label class="task-form__label">
                            "Name"
                            <input
                                class="task-form__input"
                                type="text"
                                prop:value=move || form.get().name
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.name = value);
                                }
                            />
                        </label>
                        <label class="task-form__label">
                            "Description"
                            <textarea
                                class="task-form__input"
                                prop:value=move || form.get().description
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.description = value);
                                }
                            ></textarea>
                        </label>
                        <label class="task-form__label">
                            "Suggested date"
                            <input
                                class="task-form__input"
                                type="date"
                                prop:value=move || form.get().suggested_date
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.suggested_date = value);
                                }
                            />
                        </label>
                        <label class="task-form__label">
                            "Urgency"
                            <select
                                class="task-form__input"
                                prop:value=move || form.get().urgency_level
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.urgency_level = value);
                                }
                            >
                                {UrgencyLevel::ALL
                                    .into_iter()
                                    .map(|level| view! { <option value=level.as_str()>{level.label()}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>

                        <fieldset class="task-form__group">
                            <legend>"Equipment"</legend>
                            {move || {
                                equipments
                                    .get()
                                    .into_iter()
                                    .map(|e| {
                                        let id = e.id;
                                        view! {
                                            <label class="task-form__check">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || form.get().equipments.contains(&id)
                                                    on:change=move |_| form.update(|f| toggle_id(&mut f.equipments, id))
                                                />
                                                {format!("{} ({})", e.name, e.code)}
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </fieldset>

                        <fieldset class="task-form__group">
                            <legend>"Responsibles"</legend>
                            {move || {
                                users
                                    .get()
                                    .into_iter()
                                    .map(|u| {
                                        let id = u.id;
                                        view! {
                                            <label class="task-form__check">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || form.get().responsibles.contains(&id)
                                                    on:change=move |_| form.update(|f| toggle_id(&mut f.responsibles, id))
                                                />
                                                {u.name}
                                            </label>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </fieldset>

                        <div class="dialog__actions">
                            <a class="btn" href=AppRoute::Dashboard.path()>"Cancel"</a>
                            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                "Save"
                            </button>
                        </div>
                    </form>
                </Show>
                <Show when=move || !info.get().is_empty()>
                    <p class="task-form__message">{move || info.get()}</p>
                </Show>
            </div>
        </Show>
    }
}

/// Fetch the lookup lists and, in edit mode, the task being edited.
fn load_form_data(
    edit_id: Option<Id>,
    form: RwSignal<TaskForm>,
    equipments: RwSignal<Vec<Equipment>>,
    users: RwSignal<Vec<CustomUser>>,
    info: RwSignal<String>,
) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::net::api;

        match api::get_equipments().await {
            Ok(list) => equipments.set(list),
            Err(e) => info.set(format!("Could not load equipment: {}", e.user_message())),
        }
        match api::get_users().await {
            Ok(list) => users.set(list),
            Err(e) => info.set(format!("Could not load users: {}", e.user_message())),
        }
        if let Some(id) = edit_id {
            match api::get_task(id).await {
                Ok(task) => form.set(TaskForm::from_payload(TaskPayload::from_task(&task))),
                Err(e) => info.set(format!("Could not load task: {}", e.user_message())),
            }
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (edit_id, form, equipments, users, info);
    }
}
