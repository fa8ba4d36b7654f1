//! Resolving fragment paths to fetchable URLs.
//!
//! A page may be served from a different base than its source tree, so every
//! path gets a primary URL and, when it differs, one same-origin fallback.

use url::{Position, Url};

/// Error type for fragment path resolution.
#[derive(Debug, Clone, thiserror::Error)]
pub enum UrlError {
    #[error("empty path")]
    Empty,

    #[error("unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Parse and check the base URL fragment paths are resolved against.
pub fn parse_base(input: &str) -> Result<Url, UrlError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let parsed = Url::parse(trimmed).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
    check_scheme(&parsed)?;
    Ok(parsed)
}

/// Resolve a fragment path into the URLs to try, in order.
///
/// - Relative paths (`./services.html`, `services.html`, `/site/services.html`)
///   join `base` first, then fall back to the same path at the origin root.
/// - Absolute http(s) URLs are fetched as given first, then the same path
///   (and query) on `base`'s origin.
///
/// Fragments are dropped. The fallback is omitted when it equals the primary.
pub fn resolve_candidates(base: &Url, path: &str) -> Result<Vec<Url>, UrlError> {
    let trimmed = path.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let (mut primary, mut same_origin) = match Url::parse(trimmed) {
        Ok(absolute) => {
            check_scheme(&absolute)?;
            let same_origin = base
                .join(&absolute[Position::BeforePath..Position::AfterQuery])
                .map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
            (absolute, same_origin)
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let primary = base.join(trimmed).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
            let rooted = format!("/{}", trimmed.trim_start_matches("./").trim_start_matches('/'));
            let same_origin = base.join(&rooted).map_err(|e| UrlError::InvalidUrl(e.to_string()))?;
            (primary, same_origin)
        }
        Err(e) => return Err(UrlError::InvalidUrl(e.to_string())),
    };

    primary.set_fragment(None);
    same_origin.set_fragment(None);

    if same_origin == primary { Ok(vec![primary]) } else { Ok(vec![primary, same_origin]) }
}

fn check_scheme(url: &Url) -> Result<(), UrlError> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(UrlError::UnsupportedScheme(scheme.to_string())),
    }
}
