//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterPayload;
use crate::routes::{AppRoute, GuardDecision};
use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

/// Raw form values before validation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterForm {
    name: String,
    email: String,
    nif: String,
    password: String,
    confirm: String,
}

fn validate_register_form(form: &RegisterForm) -> Result<RegisterPayload, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    let nif = form.nif.trim();
    if name.is_empty() || email.is_empty() || nif.is_empty() || form.password.is_empty() {
        return Err("Fill in every field.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterPayload {
        name: name.to_owned(),
        email: email.to_owned(),
        nif: nif.to_owned(),
        password: form.password.clone(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let decision = install_route_guard(AppRoute::Register, auth, navigate.clone());

    let form = RwSignal::new(RegisterForm::default());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let registered = RwSignal::new(false);

    Effect::new(move || {
        if registered.get() {
            navigate(&AppRoute::Login.path(), NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_register_form(&form.get()) {
            Ok(payload) => payload,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::register(&payload).await {
                Ok(user) => {
                    log::info!("registered user {}", user.id);
                    registered.set(true);
                }
                Err(e) => info.set(format!("Registration failed: {}", e.user_message())),
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (payload, registered);
        }
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&RegisterForm) -> String, set: fn(&mut RegisterForm, String)| {
        view! {
            <label class="login-label">
                {label}
                <input
                    class="login-input"
                    type=kind
                    prop:value=move || get(&form.get())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=|| view! { <div class="login-page"><p>"Loading..."</p></div> }
        >
            <div class="login-page">
                <div class="login-card">
                    <h1>"Create account"</h1>
                    <form class="login-form" on:submit=on_submit>
                        {field("Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                        {field("Email", "email", |f| f.email.clone(), |f, v| f.email = v)}
                        {field("NIF", "text", |f| f.nif.clone(), |f, v| f.nif = v)}
                        {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                        {field("Confirm password", "password", |f| f.confirm.clone(), |f, v| f.confirm = v)}
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Register"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message">{move || info.get()}</p>
                    </Show>
                    <div class="login-divider"></div>
                    <a href=AppRoute::Login.path() class="login-link">
                        "Already have an account? Sign in"
                    </a>
                </div>
            </div>
        </Show>
    }
}
