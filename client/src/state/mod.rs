//! Client-side state containers.
//!
//! `auth` is provided app-wide as context; `tasks` and `reports` are
//! page-scoped and rebuilt from each REST fetch.

pub mod auth;
pub mod reports;
pub mod tasks;
