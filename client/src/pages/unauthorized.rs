//! Landing page for signed-in users outside the technician groups.

use leptos::prelude::*;

use crate::routes::AppRoute;
use crate::state::auth::AuthState;
use crate::util::auth::sign_out;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Access restricted"</h1>
                <p class="login-message">
                    "Your account does not belong to a technician group, so task management is unavailable."
                </p>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| view! { <a href=AppRoute::Login.path() class="login-link">"Sign in"</a> }
                >
                    <p class="login-message">{move || format!("Signed in as {}.", auth.get().display_name())}</p>
                    <button class="login-button" on:click=move |_| sign_out(auth)>
                        "Logout"
                    </button>
                </Show>
            </div>
        </div>
    }
}
