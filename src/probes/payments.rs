//! Payments server reachability probe.

use crate::config::{SettingKey, SettingsSnapshot};
use crate::secrets::truncate_chars;

use super::{HttpProber, ProbeOutcome, ProbeReport, ProbeTarget};

/// Maximum number of body characters kept in a success preview.
pub const BODY_PREVIEW_CHARS: usize = 100;

/// Build the health URL from the configured API base URL.
pub fn health_url(base_url: &str) -> String {
    format!("{}/health", base_url.trim_end_matches('/'))
}

/// Classify a health check response. Only `200` counts as healthy.
pub fn classify(status: u16, body: &str) -> ProbeOutcome {
    if status == 200 {
        ProbeOutcome::Reachable {
            status,
            body_preview: Some(truncate_chars(body, BODY_PREVIEW_CHARS).to_string()),
        }
    } else {
        ProbeOutcome::HttpError { status }
    }
}

/// Probe the payments server configured in `snapshot`.
pub fn probe(prober: &HttpProber, snapshot: &SettingsSnapshot) -> ProbeReport {
    let target = ProbeTarget::Payments;
    let Some(base) = snapshot.get(SettingKey::ApiBaseUrl) else {
        return ProbeReport::skipped(target, format!("{} is not set", SettingKey::ApiBaseUrl));
    };

    let url = health_url(base);
    tracing::debug!("Probing {} at {}", target, url);

    match prober.get(&url) {
        Ok(response) => ProbeReport {
            target,
            outcome: classify(response.status, &response.body),
            url: Some(url),
        },
        Err(e) => ProbeReport::connection_error(target, Some(url), &e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::collections::BTreeMap;
    use std::net::TcpListener;

    fn snapshot(base_url: &str) -> SettingsSnapshot {
        let mut values = BTreeMap::new();
        values.insert(SettingKey::ApiBaseUrl, base_url.to_string());
        SettingsSnapshot::new(".env", values)
    }

    fn refused_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    #[test]
    fn health_url_appends_path() {
        assert_eq!(health_url("http://host:3000"), "http://host:3000/health");
    }

    #[test]
    fn health_url_strips_trailing_slashes() {
        assert_eq!(health_url("http://host:3000//"), "http://host:3000/health");
    }

    #[test]
    fn classify_only_accepts_200() {
        assert!(classify(200, "OK").is_reachable());
        assert_eq!(classify(204, ""), ProbeOutcome::HttpError { status: 204 });
        assert_eq!(classify(301, ""), ProbeOutcome::HttpError { status: 301 });
    }

    #[test]
    fn classify_truncates_body_preview() {
        let body = "x".repeat(250);
        match classify(200, &body) {
            ProbeOutcome::Reachable { body_preview, .. } => {
                assert_eq!(body_preview.map(|b| b.len()), Some(100));
            }
            other => panic!("Expected Reachable, got {:?}", other),
        }
    }

    #[test]
    fn probe_skips_without_base_url() {
        let prober = HttpProber::new().unwrap();
        let report = probe(&prober, &SettingsSnapshot::empty(".env"));

        assert!(matches!(report.outcome, ProbeOutcome::Skipped { .. }));
        assert!(report.url.is_none());
    }

    #[test]
    fn probe_reports_ok_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200).body("OK");
        });

        let prober = HttpProber::new().unwrap();
        let report = probe(&prober, &snapshot(&server.base_url()));

        mock.assert();
        assert_eq!(
            report.outcome,
            ProbeOutcome::Reachable {
                status: 200,
                body_preview: Some("OK".to_string())
            }
        );
    }

    #[test]
    fn probe_reports_non_200_as_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(502);
        });

        let prober = HttpProber::new().unwrap();
        let report = probe(&prober, &snapshot(&server.base_url()));

        assert_eq!(report.outcome, ProbeOutcome::HttpError { status: 502 });
    }

    #[test]
    fn probe_reports_refused_connection() {
        let prober = HttpProber::new().unwrap();
        let report = probe(&prober, &snapshot(&refused_url()));

        assert!(matches!(
            report.outcome,
            ProbeOutcome::ConnectionError { .. }
        ));
        assert!(report.outcome.is_failure());
    }
}
