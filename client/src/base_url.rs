//! Base-URL resolution.
//!
//! The frontend talks to the API on port 8000 of whatever host served the
//! page. Code running server-side has no page, so it reaches the backend by
//! its service name inside the container network instead.

/// Port the API listens on, both in the browser and in the container network.
pub const API_PORT: u16 = 8000;

/// Base used when there is no browser location to derive one from.
pub const SERVER_BASE_URL: &str = "http://backend:8000/api";

/// Where the client is running, as far as base-URL selection cares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionContext {
    /// A page with an addressable location. `protocol` follows the browser
    /// convention and includes the trailing colon (`"https:"`).
    Browser { protocol: String, hostname: String },
    /// No browser location, e.g. server-side rendering.
    Server,
}

impl ExecutionContext {
    pub fn browser(protocol: impl Into<String>, hostname: impl Into<String>) -> Self {
        ExecutionContext::Browser {
            protocol: protocol.into(),
            hostname: hostname.into(),
        }
    }

    /// Resolve the API base URL for this context. The result has no trailing
    /// slash and ends in `/api`.
    pub fn base_url(&self) -> String {
        match self {
            ExecutionContext::Browser { protocol, hostname } => {
                let scheme = protocol.trim_end_matches(':');
                format!("{scheme}://{hostname}:{API_PORT}/api")
            }
            ExecutionContext::Server => SERVER_BASE_URL.to_string(),
        }
    }
}
