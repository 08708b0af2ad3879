use std::env;

use crate::layout::DEFAULT_MOBILE_BREAKPOINT_PX;

const LOCAL_JWT_SECRET: &str = "super-secure-test-secret-value-local";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// AppConfig
///
/// Immutable configuration loaded once at startup and shared with handlers
/// through `FromRef`.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls the local header bypass.
    pub env: Env,
    // Secret used to validate session JWTs issued by the auth backend.
    pub jwt_secret: String,
    // Listen address for the HTTP server.
    pub bind_addr: String,
    // Viewport widths below this are treated as mobile for toast placement.
    pub mobile_breakpoint_px: u32,
}

/// Env
///
/// Local enables development conveniences (header bypass, pretty logs);
/// Production demands every secret explicitly.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

impl Default for AppConfig {
    /// Test configuration that needs no environment variables.
    fn default() -> Self {
        Self {
            env: Env::Local,
            jwt_secret: LOCAL_JWT_SECRET.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from environment variables.
    ///
    /// # Panics
    /// Panics when `SESSION_JWT_SECRET` is missing in production, so the
    /// service never starts validating sessions against a known default.
    pub fn load() -> Self {
        let env = match env::var("APP_ENV").as_deref() {
            Ok("production") => Env::Production,
            _ => Env::Local,
        };

        let jwt_secret = match env {
            Env::Production => env::var("SESSION_JWT_SECRET")
                .expect("FATAL: SESSION_JWT_SECRET must be set in production."),
            Env::Local => {
                env::var("SESSION_JWT_SECRET").unwrap_or_else(|_| LOCAL_JWT_SECRET.to_string())
            }
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let mobile_breakpoint_px = env::var("MOBILE_BREAKPOINT_PX")
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(DEFAULT_MOBILE_BREAKPOINT_PX);

        Self {
            env,
            jwt_secret,
            bind_addr,
            mobile_breakpoint_px,
        }
    }
}
