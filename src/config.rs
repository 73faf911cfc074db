//! Configuration loading and constants.
//!
//! Loads application configuration from environment variables and defines
//! constants for defaults and the hardened security header values.
//! `AppConfig` is the root configuration struct containing all settings.

use http::HeaderValue;

// =============================================================================
// Security Response Headers
// =============================================================================
// Hardened defaults applied to every response. Applied with if_not_present
// semantics, so a future route can override an individual header.

/// Content-Security-Policy applied to every response
pub const SECURITY_CSP: &str = "default-src 'self'";

/// X-Content-Type-Options: disable MIME sniffing
pub const SECURITY_CONTENT_TYPE_OPTIONS: &str = "nosniff";

/// X-Frame-Options: disallow cross-origin framing
pub const SECURITY_FRAME_OPTIONS: &str = "SAMEORIGIN";

/// Referrer-Policy: never leak referrer information
pub const SECURITY_REFERRER_POLICY: &str = "no-referrer";

/// Strict-Transport-Security: one year, including subdomains
pub const SECURITY_HSTS: &str = "max-age=31536000; includeSubDomains";

/// X-XSS-Protection: "0" disables the legacy auditor, which introduced
/// vulnerabilities of its own in older browsers
pub const SECURITY_XSS_PROTECTION: &str = "0";

// =============================================================================
// Defaults
// =============================================================================

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default TCP port
pub const DEFAULT_PORT: u16 = 3001;

/// Default allowed cross-origin value (wildcard: allow all)
pub const DEFAULT_CORS_ORIGIN: &str = "*";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "aurapartner_api=info";

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// APP_ENV value that designates a test run (access logging disabled)
pub const TEST_ENV: &str = "test";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Cross-origin policy
    pub cors: CorsConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
}

/// Cross-origin policy configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Allowed origin; the wildcard `*` allows all origins
    pub allowed_origin: String,
}

impl CorsConfig {
    /// Whether the policy allows any origin
    pub fn allows_any(&self) -> bool {
        self.allowed_origin == DEFAULT_CORS_ORIGIN
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Whether the per-request access log middleware is installed.
    /// Derived from APP_ENV at load time: false for test runs, true otherwise.
    pub access_log: bool,
    /// Log format: "text" (human-readable, default) or "json" (structured)
    pub format: String,
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Missing variables are not errors; documented defaults apply silently.
    /// A variable that is present but unparseable is a [`ConfigError`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => DEFAULT_PORT,
        };

        let app_env = std::env::var("APP_ENV").unwrap_or_default();

        let config = Self {
            http: HttpServerConfig {
                host: std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
                port,
            },
            cors: CorsConfig {
                allowed_origin: std::env::var("CORS_ORIGIN")
                    .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
            },
            logging: LoggingConfig {
                access_log: app_env != TEST_ENV,
                format: std::env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| DEFAULT_LOG_FORMAT.to_string()),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate values that may also arrive via CLI overrides.
    ///
    /// Call again after mutating the config so router construction can rely
    /// on the origin parsing as a header value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.cors.allows_any()
            && self.cors.allowed_origin.parse::<HeaderValue>().is_err()
        {
            return Err(ConfigError::InvalidCorsOrigin(
                self.cors.allowed_origin.clone(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("Invalid CORS_ORIGIN value (not a legal header value): {0}")]
    InvalidCorsOrigin(String),
}
