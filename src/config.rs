use axum::http::HeaderValue;
use std::env;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_SESSION_COOKIE: &str = "token";
pub const DEFAULT_ROLE_COOKIE: &str = "role";

/// AppConfig
///
/// Holds the application's entire configuration state. Immutable once loaded and
/// shared with every request through `FromRef<AppState>`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls log format and CORS strictness.
    pub env: Env,
    // Socket address the HTTP server binds to.
    pub bind_addr: String,
    // Name of the cookie carrying the opaque session credential.
    pub session_cookie: String,
    // Name of the cookie carrying the role label.
    pub role_cookie: String,
    // Single origin allowed by CORS. `None` allows any origin (local only).
    pub cors_allowed_origin: Option<HeaderValue>,
}

/// Env
///
/// Defines the runtime context: pretty logs and permissive CORS locally,
/// JSON logs and a pinned origin in production.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// default
    ///
    /// Non-panicking configuration for test state scaffolding. Mirrors the local defaults.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            role_cookie: DEFAULT_ROLE_COOKIE.to_string(),
            cors_allowed_origin: None,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from environment variables at startup.
    ///
    /// # Panics
    /// Panics in production when `CORS_ALLOWED_ORIGIN` is missing, and in any environment
    /// when it is set to something that is not a valid header value.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let cors_origin = match env {
            Env::Production => Some(
                env::var("CORS_ALLOWED_ORIGIN")
                    .expect("FATAL: CORS_ALLOWED_ORIGIN must be set in production."),
            ),
            Env::Local => env::var("CORS_ALLOWED_ORIGIN").ok(),
        };
        let cors_allowed_origin = cors_origin.map(|origin| {
            HeaderValue::from_str(&origin)
                .expect("FATAL: CORS_ALLOWED_ORIGIN is not a valid header value.")
        });

        Self {
            env,
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            session_cookie: env::var("SESSION_COOKIE")
                .unwrap_or_else(|_| DEFAULT_SESSION_COOKIE.to_string()),
            role_cookie: env::var("ROLE_COOKIE").unwrap_or_else(|_| DEFAULT_ROLE_COOKIE.to_string()),
            cors_allowed_origin,
        }
    }
}
