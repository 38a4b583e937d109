//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render task chrome and read shared auth state from Leptos
//! context providers.

pub mod status_badge;
pub mod task_card;
pub mod toolbar;
