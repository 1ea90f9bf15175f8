//! Server configuration
//!
//! Defaults, duration parsing for the CLI, and the request logging toggle
//! (including the deprecated `LOGGING` variable).

use std::time::Duration;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_PORT: u16 = 7070;
/// Default time allowed for in-flight requests to finish on shutdown
pub const DEFAULT_GRACEFUL_TIMEOUT: Duration = Duration::from_secs(15);
/// Default per-request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Parse a human readable duration such as `15s`, `1m`, `500ms` or `2h`.
///
/// A bare number is read as seconds.
pub fn parse_duration(input: &str) -> Result<Duration, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err("duration must not be empty".to_string());
    }

    let split = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let (digits, unit) = trimmed.split_at(split);
    if digits.is_empty() {
        return Err(format!("invalid duration '{}': missing amount", input));
    }
    let amount: u64 = digits
        .parse()
        .map_err(|e| format!("invalid duration '{}': {}", input, e))?;

    let secs_per_unit = match unit {
        "ms" => return Ok(Duration::from_millis(amount)),
        "" | "s" => 1,
        "m" => 60,
        "h" => 3600,
        other => {
            return Err(format!(
                "invalid duration '{}': unknown unit '{}'",
                input, other
            ))
        }
    };
    amount
        .checked_mul(secs_per_unit)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("invalid duration '{}': out of range", input))
}

/// Returns true for `1/true/yes/on` (case-insensitive)
fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Whether per-request logging is enabled.
///
/// `USER_SERVICE_LOGGING` takes a boolean. The legacy `LOGGING` variable
/// enables request logging whenever it is present, whatever its value.
pub fn is_request_logging_enabled() -> bool {
    if let Ok(val) = std::env::var("USER_SERVICE_LOGGING") {
        return is_truthy(&val);
    }
    if std::env::var_os("LOGGING").is_some() {
        tracing::warn!(
            "Environment variable 'LOGGING' is deprecated, use 'USER_SERVICE_LOGGING' instead"
        );
        return true;
    }
    false
}

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Time allowed for in-flight requests to finish after a shutdown signal
    pub graceful_timeout: Duration,
    /// Per-request timeout
    pub request_timeout: Duration,
    /// Log every request (method, uri, status, latency)
    pub request_logging: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            graceful_timeout: DEFAULT_GRACEFUL_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            request_logging: false,
        }
    }
}

impl ServerConfig {
    /// `host:port` string for binding
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
