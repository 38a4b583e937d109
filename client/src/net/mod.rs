//! Networking modules for the maintenance REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `error` classifies their failures, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
