//! # Gateway Boundary
//!
//! The interfaces this crate expects from the surrounding HTTP gateway:
//! connection settings, the session registry over an external
//! [`Connector`], and the JSON shapes handed back to clients.
//!
//! Transport, authentication and cookie handling live outside this crate.

pub mod session;
pub mod table;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub use session::{Connector, SessionRegistry, SessionId};
pub use table::{QueryResult, ExecuteResult};

// ============================================================================
// Configuration
// ============================================================================

/// Environment variable consulted when no address is configured.
pub const ENV_ADDRESS: &str = "DB_ADDRESS";
/// Environment variable consulted when no port is configured.
pub const ENV_PORT: &str = "DB_PORT";

/// Where and as whom to connect to the graph service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub port: u16,
    /// Engine version hint; empty means "detect".
    #[serde(default)]
    pub version: String,
}

impl GatewayConfig {
    /// Fill a missing address/port from `DB_ADDRESS` / `DB_PORT`.
    pub fn with_env_fallback(self) -> Result<Self> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Same as [`GatewayConfig::with_env_fallback`] with a custom lookup.
    pub fn resolve_with(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if self.address.is_empty() {
            self.address = lookup(ENV_ADDRESS).unwrap_or_default();
        }
        if self.port == 0 {
            if let Some(raw) = lookup(ENV_PORT) {
                self.port = raw.trim().parse().map_err(|_| {
                    Error::Config(format!("{ENV_PORT} is not a valid port: {raw:?}"))
                })?;
            }
        }
        if self.address.is_empty() {
            return Err(Error::Config(format!("no address given and {ENV_ADDRESS} is unset")));
        }
        if self.port == 0 {
            return Err(Error::Config(format!("no port given and {ENV_PORT} is unset")));
        }
        tracing::debug!(address = %self.address, port = self.port, "resolved gateway config");
        Ok(self)
    }
}

// ============================================================================
// Request / Response bodies
// ============================================================================

/// Body of an execute call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteRequest {
    pub gql: String,
    /// Parameter declarations forwarded verbatim to the engine.
    #[serde(default)]
    pub param_list: Vec<String>,
}

/// Envelope of every gateway reply: `code` 0 on success, -1 on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub code: i32,
    pub data: serde_json::Value,
    pub message: String,
}

impl Response {
    pub const OK: i32 = 0;
    pub const FAILED: i32 = -1;

    pub fn success(data: serde_json::Value, message: impl Into<String>) -> Self {
        Self { code: Self::OK, data, message: message.into() }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self { code: Self::FAILED, data: serde_json::Value::Null, message: message.into() }
    }

    /// Map an operation result into the envelope.
    pub fn from_result<T: Serialize>(result: Result<T>, message: impl Into<String>) -> Self {
        match result.and_then(|data| Ok(serde_json::to_value(data)?)) {
            Ok(data) => Self::success(data, message),
            Err(e) => {
                tracing::warn!(error = %e, "gateway request failed");
                Self::failure(e.to_string())
            }
        }
    }
}
