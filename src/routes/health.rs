//! Health check endpoint for container orchestration.
//!
//! Provides a liveness probe returning a JSON status payload. Used by
//! deployment and monitoring tooling to verify the process is responsive.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Health status payload, constructed fresh on every request.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub timestamp: String,
    pub version: &'static str,
    pub architecture: &'static str,
}

impl HealthStatus {
    /// Snapshot of the current service status with a fresh timestamp.
    pub fn current() -> Self {
        Self {
            status: "healthy",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            version: env!("CARGO_PKG_VERSION"),
            architecture: "Supabase + Zep + VPS",
        }
    }
}

/// Health check handler.
///
/// Synchronously constructs and returns the status payload. Performs no I/O
/// and cannot fail; the timestamp is generated at request time, never cached.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus::current())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    #[test]
    fn timestamp_is_valid_rfc3339() {
        let status = HealthStatus::current();
        let parsed = DateTime::parse_from_rfc3339(&status.timestamp);
        assert!(parsed.is_ok(), "timestamp should parse as RFC 3339");
    }

    #[test]
    fn timestamp_is_fresh() {
        let status = HealthStatus::current();
        let parsed = DateTime::parse_from_rfc3339(&status.timestamp).unwrap();
        let age = Utc::now().signed_duration_since(parsed);
        assert!(age.num_seconds().abs() < 5);
    }

    #[test]
    fn sequential_snapshots_have_distinct_timestamps() {
        let first = HealthStatus::current();
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = HealthStatus::current();
        assert_ne!(first.timestamp, second.timestamp);
    }

    #[test]
    fn serializes_to_exactly_four_fields() {
        let json = serde_json::to_value(HealthStatus::current()).unwrap();
        let fields = json.as_object().unwrap();
        assert_eq!(fields.len(), 4);
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["version"], "1.0.0");
        assert_eq!(json["architecture"], "Supabase + Zep + VPS");
        assert!(json["timestamp"].is_string());
    }
}
