//! Login page exchanging email + password for a session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the token and the fetched user are committed to `AuthState` in
//! a single update; the guest-only route guard then redirects to the
//! dashboard or the unauthorized page depending on the user's groups.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::LoginCredentials;
use crate::routes::{AppRoute, GuardDecision};
use crate::state::auth::AuthState;
use crate::util::auth::install_route_guard;

fn validate_login_input(email: &str, password: &str) -> Result<LoginCredentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginCredentials { email: email.to_owned(), password: password.to_owned() })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = install_route_guard(AppRoute::Login, auth, use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::util::storage::LocalStorage;

            let mut session = auth.get_untracked();
            let result = async {
                let token = crate::net::api::login(&credentials).await?;
                session.set_token(&LocalStorage, token.auth_token);
                let user = crate::net::api::get_me().await?;
                session.set_user(&LocalStorage, user);
                Ok::<_, crate::net::error::ApiError>(())
            }
            .await;
            match result {
                Ok(()) => {
                    log::info!("signed in as {}", session.display_name());
                    auth.set(session);
                    info.set(String::new());
                }
                Err(e) => {
                    session.clear_token(&LocalStorage);
                    info.set(format!("Login failed: {}", e.user_message()));
                }
            }
            busy.set(false);
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
        }
    };

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=|| view! { <div class="login-page"><p>"Loading..."</p></div> }
        >
            <div class="login-page">
                <div class="login-card">
                    <h1>"ManuTrack"</h1>
                    <p class="login-card__subtitle">"Maintenance requests"</p>
                    <form class="login-form" on:submit=on_submit>
                        <input
                            class="login-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <button class="login-button" type="submit" disabled=move || busy.get()>
                            "Sign In"
                        </button>
                    </form>
                    <Show when=move || !info.get().is_empty()>
                        <p class="login-message">{move || info.get()}</p>
                    </Show>
                    <div class="login-divider"></div>
                    <a href=AppRoute::Register.path() class="login-link">
                        "Create an account"
                    </a>
                </div>
            </div>
        </Show>
    }
}
