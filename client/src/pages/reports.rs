//! Reports page summarizing the current task list.

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::status_badge::StatusBadge;
use crate::components::toolbar::Toolbar;
use crate::net::types::Task;
use crate::routes::{AppRoute, GuardDecision};
use crate::state::auth::AuthState;
use crate::state::reports::TaskReport;
use crate::util::auth::install_route_guard;

/// Share of `count` in `total` as a whole percentage.
fn percent(count: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (count * 100 + total / 2) / total
}

/// Local calendar date as `YYYY-MM-DD`.
#[cfg(feature = "hydrate")]
fn today() -> String {
    let now = js_sys::Date::new_0();
    format!("{:04}-{:02}-{:02}", now.get_full_year(), now.get_month() + 1, now.get_date())
}

#[cfg(not(feature = "hydrate"))]
fn today() -> String {
    String::new()
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let decision = install_route_guard(AppRoute::Reports, auth, use_navigate());
    let tasks = RwSignal::new(None::<Vec<Task>>);
    let error = RwSignal::new(None::<String>);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() || decision.get() != GuardDecision::Allow {
            return;
        }
        requested.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::get_tasks().await {
                Ok(list) => tasks.set(Some(list)),
                Err(e) => error.set(Some(format!("Could not load tasks: {}", e.user_message()))),
            }
        });
    });

    let report = Memo::new(move |_| tasks.get().map(|list| TaskReport::from_tasks(&list, &today())));

    view! {
        <Show
            when=move || decision.get() == GuardDecision::Allow
            fallback=|| view! { <div class="reports-page"><p>"Loading..."</p></div> }
        >
            <div class="reports-page">
                <Toolbar title="Reports"/>
                <Show when=move || error.get().is_some()>
                    <p class="reports-page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                {move || match report.get() {
                    None => view! { <p>"Loading tasks..."</p> }.into_any(),
                    Some(report) => view! { <ReportView report=report/> }.into_any(),
                }}
            </div>
        </Show>
    }
}

#[component]
fn ReportView(report: TaskReport) -> impl IntoView {
    let total = report.total;

    view! {
        <section class="report-totals">
            <div class="report-tile"><span>"Total"</span><strong>{total}</strong></div>
            <div class="report-tile"><span>"Overdue"</span><strong>{report.overdue}</strong></div>
            <div class="report-tile"><span>"Unassigned"</span><strong>{report.unassigned}</strong></div>
            <div class="report-tile"><span>"No status"</span><strong>{report.no_status}</strong></div>
        </section>

        <section class="report-section">
            <h2>"By status"</h2>
            <table class="report-table">
                {report
                    .by_status
                    .into_iter()
                    .map(|(kind, count)| {
                        view! {
                            <tr>
                                <td><StatusBadge status=Some(kind)/></td>
                                <td>{count}</td>
                                <td>{format!("{}%", percent(count, total))}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </table>
        </section>

        <section class="report-section">
            <h2>"By urgency"</h2>
            <table class="report-table">
                {report
                    .by_urgency
                    .into_iter()
                    .map(|(level, count)| {
                        view! {
                            <tr>
                                <td>{level}</td>
                                <td>{count}</td>
                                <td>{format!("{}%", percent(count, total))}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </table>
        </section>

        <section class="report-section">
            <h2>"Open tasks per responsible"</h2>
            <table class="report-table">
                {report
                    .workload
                    .into_iter()
                    .map(|load| view! { <tr><td>{load.name}</td><td>{load.open_tasks}</td></tr> })
                    .collect::<Vec<_>>()}
            </table>
        </section>
    }
}
