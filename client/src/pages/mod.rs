//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs its route guard, owns route-scoped orchestration, and
//! delegates shared rendering to `components`.

pub mod dashboard;
pub mod login;
pub mod register;
pub mod reports;
pub mod task_detail;
pub mod task_form;
pub mod unauthorized;
