//! Top bar with primary navigation, the signed-in user, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every technician page so navigation between the task list,
//! task creation, and reports stays one click away.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

/// Top toolbar for authenticated pages.
#[component]
pub fn Toolbar(#[prop(into)] title: String) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;

    let link_class = move |path: &'static str| {
        if pathname.get() == path {
            "toolbar__link toolbar__link--active"
        } else {
            "toolbar__link"
        }
    };

    view! {
        <div class="toolbar">
            <span class="toolbar__title">{title}</span>
            <span class="toolbar__divider"></span>
            <nav class="toolbar__nav">
                <a href="/" class=move || link_class("/")>"Tasks"</a>
                <a href=AppRoute::TaskCreate.path() class=move || link_class("/task/new")>"+ New Task"</a>
                <a href=AppRoute::Reports.path() class=move || link_class("/reports")>"Reports"</a>
            </nav>

            <span class="toolbar__spacer"></span>

            <span class="toolbar__self">{move || auth.get().display_name()}</span>

            <button class="btn toolbar__logout" on:click=move |_| sign_out(auth) title="Logout">
                "Logout"
            </button>
        </div>
    }
}
