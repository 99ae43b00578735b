use std::sync::LazyLock;
use std::time::{Duration, Instant};

use regex::Regex;
use thiserror::Error;
use tracing::info;

use crate::settings::Settings;

static CERT_ID_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+$").unwrap());
static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://\S+$").unwrap());

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("not a certificate id or URL: {0:?}")]
    InvalidReference(String),
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Accept either a full certificate URL or a bare numeric certificate id.
pub fn certificate_url(reference: &str, base_url: &str) -> Result<String, FetchError> {
    let reference = reference.trim();
    if URL_RE.is_match(reference) {
        Ok(reference.to_string())
    } else if CERT_ID_RE.is_match(reference) {
        Ok(format!("{}/{}", base_url.trim_end_matches('/'), reference))
    } else {
        Err(FetchError::InvalidReference(reference.to_string()))
    }
}

pub fn client(settings: &Settings) -> Result<reqwest::Client, FetchError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.as_str())
        .build()
        .map_err(FetchError::Client)
}

/// Fetch a certificate page as text. Non-2xx responses are errors.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    info!("Fetching certificate: {}", url);
    let start = Instant::now();

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().await.map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;

    info!(
        "Fetched {} bytes in {}ms",
        body.len(),
        start.elapsed().as_millis()
    );
    Ok(body)
}

// ── Tests ──
