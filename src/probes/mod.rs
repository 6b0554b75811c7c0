//! Reachability probes for the two backends.
//!
//! - [`auth`] - HEAD against the Supabase REST endpoint
//! - [`payments`] - GET against the payments server's `/health`
//! - [`http`] - The blocking client both probes share
//!
//! A probe never fails: every error is folded into a [`ProbeOutcome`] so
//! the caller can report it and move on.

pub mod auth;
pub mod http;
pub mod payments;

pub use http::{HttpProber, ProbeResponse, DEFAULT_TIMEOUT};

use serde::Serialize;
use std::fmt;

/// Which backend a probe targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeTarget {
    /// Supabase authentication backend.
    Auth,
    /// Mercado Pago payments server.
    Payments,
}

impl fmt::Display for ProbeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auth => f.write_str("Supabase"),
            Self::Payments => f.write_str("the Mercado Pago server"),
        }
    }
}

/// Result of a single probe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum ProbeOutcome {
    /// The service answered with a status the probe accepts.
    Reachable {
        status: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        body_preview: Option<String>,
    },
    /// The service answered with a status the probe rejects.
    HttpError { status: u16 },
    /// The request could not be built or completed.
    ConnectionError { message: String },
    /// The probe did not run.
    Skipped { reason: String },
}

impl ProbeOutcome {
    /// Whether the service was confirmed reachable.
    pub fn is_reachable(&self) -> bool {
        matches!(self, Self::Reachable { .. })
    }

    /// Whether the probe ran and failed.
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::HttpError { .. } | Self::ConnectionError { .. })
    }
}

/// A probe's target, the URL it hit, and what happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub target: ProbeTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub outcome: ProbeOutcome,
}

impl ProbeReport {
    pub(crate) fn skipped(target: ProbeTarget, reason: impl Into<String>) -> Self {
        Self {
            target,
            url: None,
            outcome: ProbeOutcome::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub(crate) fn unavailable(target: ProbeTarget) -> Self {
        Self::skipped(target, "HTTP client unavailable")
    }

    pub(crate) fn connection_error(
        target: ProbeTarget,
        url: Option<String>,
        err: &crate::error::DoctorError,
    ) -> Self {
        tracing::debug!("{} probe failed: {}", target, err);
        Self {
            target,
            url,
            outcome: ProbeOutcome::ConnectionError {
                message: err.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reachable_is_not_failure() {
        let outcome = ProbeOutcome::Reachable {
            status: 200,
            body_preview: None,
        };
        assert!(outcome.is_reachable());
        assert!(!outcome.is_failure());
    }

    #[test]
    fn skipped_is_neither_reachable_nor_failure() {
        let outcome = ProbeOutcome::Skipped {
            reason: "no url".into(),
        };
        assert!(!outcome.is_reachable());
        assert!(!outcome.is_failure());
    }

    #[test]
    fn http_error_is_failure() {
        assert!(ProbeOutcome::HttpError { status: 404 }.is_failure());
    }

    #[test]
    fn report_serializes_flat() {
        let report = ProbeReport {
            target: ProbeTarget::Payments,
            url: Some("http://localhost:3000/health".into()),
            outcome: ProbeOutcome::HttpError { status: 500 },
        };

        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["target"], "payments");
        assert_eq!(json["result"], "http_error");
        assert_eq!(json["status"], 500);
    }

    #[test]
    fn target_display_names() {
        assert_eq!(ProbeTarget::Auth.to_string(), "Supabase");
        assert_eq!(ProbeTarget::Payments.to_string(), "the Mercado Pago server");
    }
}
