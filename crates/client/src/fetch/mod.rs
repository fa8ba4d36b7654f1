//! HTTP fetch of auxiliary site documents.
//!
//! ### Request shape
//! - Plain `GET`, no body, default credentials only.
//! - One bounded attempt per candidate URL; the client timeout aborts the
//!   attempt and counts as failure.
//!
//! ### Candidates
//! - Paths resolve against the configured page base URL.
//! - If the primary URL fails for any reason, the same path on the base
//!   origin is tried once (see [`url::resolve_candidates`]).

pub mod url;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;
use reqwest::{Client, StatusCode, header};
use std::time::{Duration, Instant};

pub use self::url::{UrlError, parse_base, resolve_candidates};

use brochure_core::{AppConfig, Error};

/// Anything that can hand back the text of a site document by path.
///
/// The content loader only depends on this trait, so the network side can be
/// swapped without touching cache or fallback logic.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch the document at `path` and return its body as text.
    async fn fetch_document(&self, path: &str) -> Result<String, Error>;
}

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Page base URL fragment paths resolve against (default: "http://localhost:8000/")
    pub base_url: String,

    /// User agent string (default: "brochure/0.1")
    pub user_agent: String,

    /// Maximum response body size in bytes (default: 2MB)
    pub max_bytes: usize,

    /// Per-attempt timeout (default: 10s)
    pub timeout: Duration,

    /// Maximum number of redirects to follow (default: 5)
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/".to_string(),
            user_agent: "brochure/0.1".to_string(),
            max_bytes: 2 * 1024 * 1024,
            timeout: Duration::from_millis(10_000),
            max_redirects: 5,
        }
    }
}

impl From<&AppConfig> for FetchConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            user_agent: config.user_agent.clone(),
            max_bytes: config.max_bytes,
            timeout: config.timeout(),
            ..Default::default()
        }
    }
}

/// Response from a fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// The URL requested
    pub url: Url,
    /// The final URL after redirects
    pub final_url: Url,
    /// HTTP status code
    pub status: StatusCode,
    /// Content-Type header
    pub content_type: Option<String>,
    /// Response body bytes
    pub bytes: Bytes,
    /// Time taken to fetch in milliseconds
    pub fetch_ms: u64,
}

impl FetchResponse {
    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.bytes).into_owned()
    }
}

/// HTTP client for site documents.
pub struct FetchClient {
    http: Client,
    base: Url,
    config: FetchConfig,
}

impl FetchClient {
    /// Create a new fetch client with the given configuration.
    pub fn new(config: FetchConfig) -> Result<Self, Error> {
        let base = parse_base(&config.base_url).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .use_rustls_tls()
            .gzip(true)
            .brotli(true)
            .deflate(true)
            .build()
            .map_err(|e| Error::HttpError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self { http, base, config })
    }

    /// Fetch one URL, returning raw bytes and metadata.
    ///
    /// Fails on network errors, timeouts, non-success statuses and bodies
    /// over `max_bytes`.
    pub async fn fetch(&self, url: &Url) -> Result<FetchResponse, Error> {
        let start = Instant::now();

        let response = self
            .http
            .get(url.as_str())
            .header(header::ACCEPT, "text/html,application/xhtml+xml;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| request_error(url, e))?;

        let status = response.status();

        if !status.is_success() {
            return Err(Error::HttpError(format!("{} returned status {}", url, status.as_u16())));
        }

        if let Some(len) = response.content_length()
            && len as usize > self.config.max_bytes
        {
            return Err(Error::FetchTooLarge(format!("{} bytes exceeds {}", len, self.config.max_bytes)));
        }

        let final_url = response.url().clone();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());

        let bytes = response.bytes().await.map_err(|e| request_error(url, e))?;

        if bytes.len() > self.config.max_bytes {
            return Err(Error::FetchTooLarge(format!("{} bytes exceeds {}", bytes.len(), self.config.max_bytes)));
        }

        let fetch_ms = start.elapsed().as_millis() as u64;

        Ok(FetchResponse { url: url.clone(), final_url, status, content_type, bytes, fetch_ms })
    }
}

#[async_trait]
impl DocumentSource for FetchClient {
    async fn fetch_document(&self, path: &str) -> Result<String, Error> {
        let candidates = resolve_candidates(&self.base, path).map_err(|e| Error::InvalidUrl(e.to_string()))?;

        let mut last_error = None;
        for (attempt, url) in candidates.iter().enumerate() {
            match self.fetch(url).await {
                Ok(response) => {
                    tracing::debug!(
                        path,
                        attempt,
                        url = %response.url,
                        final_url = %response.final_url,
                        status = response.status.as_u16(),
                        content_type = response.content_type.as_deref().unwrap_or_default(),
                        bytes = response.bytes.len(),
                        fetch_ms = response.fetch_ms,
                        "document fetched"
                    );
                    return Ok(response.text());
                }
                Err(e) => {
                    tracing::debug!(path, attempt, url = %url, error = %e, "document fetch attempt failed");
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::InvalidUrl(format!("no URL to fetch for {path}"))))
    }
}

fn request_error(url: &Url, err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::FetchTimeout(format!("{} timed out", url))
    } else {
        Error::HttpError(format!("network error for {}: {}", url, err))
    }
}
