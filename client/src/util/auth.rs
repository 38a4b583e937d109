//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical guard behavior through
//! `install_route_guard`; session restore and sign-out live here so pages do
//! not touch storage directly.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{AppRoute, GuardDecision, guard};
use crate::state::auth::AuthState;

/// Re-evaluate the guard for `route` whenever auth changes and redirect on
/// failure. The returned memo lets the page render only when allowed.
pub fn install_route_guard<F>(route: AppRoute, auth: RwSignal<AuthState>, navigate: F) -> Memo<GuardDecision>
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let decision = Memo::new(move |_| guard(route.meta(), &auth.get()));
    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
    decision
}

/// Restore the persisted session once the app is running in the browser.
///
/// Effects never run during SSR, so the server render keeps the pending
/// state. When a token survives without a cached user, the state stays
/// loading until the user is fetched.
pub fn restore_session(auth: RwSignal<AuthState>) {
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::storage::LocalStorage;

            let restored = AuthState::load(&LocalStorage);
            let needs_user = restored.needs_user();
            auth.set(restored);
            if needs_user {
                leptos::task::spawn_local(async move {
                    let fetched = crate::net::api::get_me().await;
                    if let Err(e) = &fetched {
                        log::warn!("session user fetch failed: {e}");
                    }
                    auth.update(|a| a.finish_user_fetch(&LocalStorage, fetched));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
    });
}

/// Invalidate the token server-side, then clear local state regardless of
/// the server's answer and return to the login page.
pub fn sign_out(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            use crate::util::storage::LocalStorage;

            if let Err(e) = crate::net::api::logout().await {
                log::warn!("logout request failed: {e}");
            }
            auth.update(|a| a.clear_token(&LocalStorage));
            if let Some(w) = web_sys::window() {
                let _ = w.location().set_href(crate::routes::LOGIN_PATH);
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
