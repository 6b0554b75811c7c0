//! Supabase reachability probe.
//!
//! Sends `HEAD <scheme>://<host>/rest/v1/` with the anon key in the
//! `apikey` header. Anything below 400 counts as reachable, since an
//! unauthorised key still proves the service is up.

use reqwest::Url;

use crate::config::{SettingKey, SettingsSnapshot};
use crate::error::{DoctorError, Result};

use super::{HttpProber, ProbeOutcome, ProbeReport, ProbeTarget};

/// Path probed on the Supabase host.
pub const REST_PATH: &str = "/rest/v1/";

/// Build the REST endpoint URL from a configured Supabase URL.
///
/// Only the scheme and authority are kept, so any path in the configured
/// URL is dropped.
pub fn rest_endpoint(supabase_url: &str) -> Result<String> {
    let url = Url::parse(supabase_url).map_err(|e| DoctorError::InvalidUrl {
        url: supabase_url.to_string(),
        message: e.to_string(),
    })?;

    let host = url.host_str().ok_or_else(|| DoctorError::InvalidUrl {
        url: supabase_url.to_string(),
        message: "missing host".to_string(),
    })?;

    let authority = match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    };

    Ok(format!("{}://{}{}", url.scheme(), authority, REST_PATH))
}

/// Classify a status code returned by the REST endpoint.
pub fn classify(status: u16) -> ProbeOutcome {
    if status < 400 {
        ProbeOutcome::Reachable {
            status,
            body_preview: None,
        }
    } else {
        ProbeOutcome::HttpError { status }
    }
}

/// Probe the Supabase backend configured in `snapshot`.
pub fn probe(prober: &HttpProber, snapshot: &SettingsSnapshot) -> ProbeReport {
    let target = ProbeTarget::Auth;
    let Some(base) = snapshot.get(SettingKey::SupabaseUrl) else {
        return ProbeReport::skipped(target, format!("{} is not set", SettingKey::SupabaseUrl));
    };

    let endpoint = match rest_endpoint(base) {
        Ok(endpoint) => endpoint,
        Err(e) => return ProbeReport::connection_error(target, None, &e),
    };

    let api_key = snapshot.get(SettingKey::SupabaseAnonKey).unwrap_or("");
    tracing::debug!("Probing {} at {}", target, endpoint);

    match prober.head(&endpoint, &[("apikey", api_key)]) {
        Ok(response) => ProbeReport {
            target,
            url: Some(endpoint),
            outcome: classify(response.status),
        },
        Err(e) => ProbeReport::connection_error(target, Some(endpoint), &e),
    }
}
