//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    dashboard::DashboardPage, login::LoginPage, register::RegisterPage, reports::ReportsPage,
    task_detail::TaskDetailPage, task_form::TaskFormPage, unauthorized::UnauthorizedPage,
};
use crate::state::auth::AuthState;
use crate::util::auth::restore_session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing. The session
/// starts pending and is restored from storage once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    provide_context(auth);
    restore_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/manutrack.css"/>
        <Title text="ManuTrack"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=(StaticSegment("task"), StaticSegment("new")) view=TaskFormPage/>
                <Route path=(StaticSegment("task"), StaticSegment("edit"), ParamSegment("id")) view=TaskFormPage/>
                <Route path=(StaticSegment("task"), ParamSegment("id")) view=TaskDetailPage/>
                <Route path=StaticSegment("reports") view=ReportsPage/>
            </Routes>
        </Router>
    }
}
