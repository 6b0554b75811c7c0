//! Blocking HTTP client used by the reachability probes.

use reqwest::blocking::Client;
use reqwest::redirect::Policy;
use std::time::Duration;

use crate::error::Result;

/// Default per-request timeout for probes.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Status and body of a probe response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text (empty for HEAD).
    pub body: String,
}

/// Sends single, unretried HTTP requests with a fixed timeout.
///
/// HEAD requests never follow redirects, so the status reported is the
/// probed endpoint's own. GET requests follow them.
pub struct HttpProber {
    client: Client,
    no_redirect: Client,
    timeout: Duration,
}

impl HttpProber {
    /// Create a prober with the default 5-second timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a prober with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Self::builder(timeout).build()?;
        let no_redirect = Self::builder(timeout).redirect(Policy::none()).build()?;

        Ok(Self {
            client,
            no_redirect,
            timeout,
        })
    }

    fn builder(timeout: Duration) -> reqwest::blocking::ClientBuilder {
        Client::builder()
            .user_agent(concat!("envdoctor/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
    }

    /// Get the configured timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send a HEAD request with the given extra headers.
    ///
    /// A redirect is returned as-is rather than followed.
    pub fn head(&self, url: &str, headers: &[(&str, &str)]) -> Result<ProbeResponse> {
        let mut request = self.no_redirect.head(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send()?;
        tracing::debug!("HEAD {} -> {}", url, response.status());

        Ok(ProbeResponse {
            status: response.status().as_u16(),
            body: String::new(),
        })
    }

    /// Send a GET request and read the body as text.
    pub fn get(&self, url: &str) -> Result<ProbeResponse> {
        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();
        tracing::debug!("GET {} -> {}", url, status);

        let body = response.text()?;
        Ok(ProbeResponse { status, body })
    }
}
