//! Build-time client configuration.
//!
//! The WASM bundle has no process environment at runtime, so the REST base
//! URL is baked in from `MANUTRACK_API_BASE_URL` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL used when `MANUTRACK_API_BASE_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// REST base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("MANUTRACK_API_BASE_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_owned()
}
