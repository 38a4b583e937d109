//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Port used when `PORT` is unset.
pub const DEFAULT_PORT: u16 = 3000;

/// Errors that stop the host from starting or serving.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// `PORT` is set but is not a valid TCP port.
    #[error("invalid PORT value: {value:?}")]
    InvalidPort { value: String },

    /// The Leptos options could not be loaded.
    #[error("leptos configuration: {0}")]
    Leptos(String),

    /// The listener could not bind its address.
    #[error("failed to bind {addr}: {source}")]
    Bind { addr: String, source: std::io::Error },

    /// The server loop exited with an I/O error.
    #[error("server failed: {0}")]
    Serve(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
}

impl HostConfig {
    /// Build typed host config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, HostError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        Ok(Self { port })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, HostError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| HostError::InvalidPort { value: value.to_owned() }),
    }
}
