//! Route table and navigation guard rules.
//!
//! DESIGN
//! ======
//! The guard is a pure function of route metadata and `AuthState`, so every
//! redirect rule is unit-testable without a router. `util::auth` wires it to
//! the Leptos router as a reactive effect.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::net::types::{CustomUser, Id};
use crate::state::auth::AuthState;

/// Group names that grant technician access, exactly as the server names them.
pub const TECHNICIAN_GROUPS: [&str; 3] = ["Técnico", "Tecnico", "Técnico(a)"];

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";

/// Access requirements attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    pub requires_auth: bool,
    pub requires_technician: bool,
    /// Login/register: authenticated users are sent elsewhere.
    pub guest_only: bool,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self { requires_auth: false, requires_technician: false, guest_only: false };
    pub const GUEST: Self = Self { requires_auth: false, requires_technician: false, guest_only: true };
    pub const TECHNICIAN: Self = Self { requires_auth: true, requires_technician: true, guest_only: false };
}

/// Application views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Login,
    Register,
    Unauthorized,
    TaskCreate,
    TaskEdit(Id),
    TaskDetail(Id),
    Reports,
}

impl AppRoute {
    pub fn meta(self) -> RouteMeta {
        match self {
            Self::Login | Self::Register => RouteMeta::GUEST,
            Self::Unauthorized => RouteMeta::PUBLIC,
            Self::Dashboard | Self::TaskCreate | Self::TaskEdit(_) | Self::TaskDetail(_) | Self::Reports => {
                RouteMeta::TECHNICIAN
            }
        }
    }

    /// Browser path for links and redirects.
    pub fn path(self) -> String {
        match self {
            Self::Dashboard => DASHBOARD_PATH.to_owned(),
            Self::Login => LOGIN_PATH.to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Unauthorized => UNAUTHORIZED_PATH.to_owned(),
            Self::TaskCreate => "/task/new".to_owned(),
            Self::TaskEdit(id) => format!("/task/edit/{id}"),
            Self::TaskDetail(id) => format!("/task/{id}"),
            Self::Reports => "/reports".to_owned(),
        }
    }
}

/// Outcome of evaluating the guard for a navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    /// Session not restored yet; render nothing and decide later.
    Wait,
    Redirect(&'static str),
}

/// Parse an `:id` route segment into a record id.
///
/// # Errors
///
/// Returns the rejected segment when it is not a positive integer.
pub fn parse_id_param(raw: &str) -> Result<Id, String> {
    match raw.trim().parse::<Id>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(raw.to_owned()),
    }
}

/// True when any of the user's groups is on the technician allow-list.
pub fn is_technician(user: &CustomUser) -> bool {
    user.group_names().any(|name| TECHNICIAN_GROUPS.contains(&name))
}

/// Where an authenticated user lands after login.
pub fn home_for(auth: &AuthState) -> &'static str {
    if auth.is_technician() { DASHBOARD_PATH } else { UNAUTHORIZED_PATH }
}

/// Decide whether navigation to a route with `meta` may proceed.
pub fn guard(meta: RouteMeta, auth: &AuthState) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Wait;
    }
    let authenticated = auth.is_authenticated();
    if meta.requires_auth && !authenticated {
        return GuardDecision::Redirect(LOGIN_PATH);
    }
    if meta.requires_technician && !auth.is_technician() {
        return GuardDecision::Redirect(UNAUTHORIZED_PATH);
    }
    if meta.guest_only && authenticated {
        return GuardDecision::Redirect(home_for(auth));
    }
    GuardDecision::Allow
}
