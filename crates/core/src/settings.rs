//! Process settings.
//!
//! Loaded once at startup and shared read-only (`Arc<Settings>`) for the rest
//! of the process lifetime. Missing values resolve to empty strings or
//! defaults; nothing is validated here.

use core::fmt;

pub const DEFAULT_APP_ENV: &str = "development";
pub const DEFAULT_BIND_HOST: &str = "0.0.0.0";
pub const DEFAULT_BIND_PORT: u16 = 5000;
pub const DEFAULT_LOG_DIR: &str = "instance";

/// Gateway configuration: backend connection parameters, the shared secret
/// and process-level switches.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub sap_host: String,
    pub sap_client: String,
    pub sap_user: String,
    pub sap_password: String,
    pub sap_system_number: String,

    /// Shared secret expected in the `X-API-KEY` header.
    pub api_key: String,

    pub app_env: String,
    pub debug: bool,

    pub bind_host: String,
    pub bind_port: u16,
    pub log_dir: String,
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// `from_env` is this with `std::env::var`; tests pass a map instead of
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let string = |key: &str| lookup(key).unwrap_or_default();
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let debug = lookup("DEBUG")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(true);

        let bind_port = match lookup("BIND_PORT") {
            None => DEFAULT_BIND_PORT,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                tracing::warn!(value = %raw, "BIND_PORT is not a valid port; using {DEFAULT_BIND_PORT}");
                DEFAULT_BIND_PORT
            }),
        };

        Self {
            sap_host: string("SAP_HOST"),
            sap_client: string("SAP_CLIENT"),
            sap_user: string("SAP_USER"),
            sap_password: string("SAP_PASSWORD"),
            sap_system_number: string("SAP_SYSTEM_NUMBER"),
            api_key: string("API_KEY"),
            app_env: or_default("APP_ENV", DEFAULT_APP_ENV),
            debug,
            bind_host: or_default("BIND_HOST", DEFAULT_BIND_HOST),
            bind_port,
            log_dir: or_default("LOG_DIR", DEFAULT_LOG_DIR),
        }
    }

    /// `host:port` the HTTP server binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

// Secrets never reach logs through `{:?}`.
impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("sap_host", &self.sap_host)
            .field("sap_client", &self.sap_client)
            .field("sap_user", &self.sap_user)
            .field("sap_password", &"<redacted>")
            .field("sap_system_number", &self.sap_system_number)
            .field("api_key", &"<redacted>")
            .field("app_env", &self.app_env)
            .field("debug", &self.debug)
            .field("bind_host", &self.bind_host)
            .field("bind_port", &self.bind_port)
            .field("log_dir", &self.log_dir)
            .finish()
    }
}
