//! URL validation and normalization.
//!
//! Ensures a candidate URL is an absolute http(s) URL with a host before it
//! is persisted, prepending a default scheme for scheme-less input.

use url::Url;

/// Scheme prepended when the input carries no scheme prefix.
const DEFAULT_SCHEME: &str = "https";

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL must not be empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS URLs are allowed")]
    UnsupportedScheme,

    #[error("URL must have a host")]
    MissingHost,
}

/// Normalizes a candidate URL to a canonical absolute form.
///
/// # Normalization Rules
///
/// 1. Surrounding whitespace is trimmed
/// 2. Input without a scheme prefix gets `https://` prepended
/// 3. Scheme must be `http` or `https`
/// 4. Host must be present and non-empty
/// 5. Hostname case and default ports are canonicalized by the parser
///
/// Query parameters, path case, and fragments are preserved as-is.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Empty`] for blank input,
/// [`UrlNormalizationError::InvalidFormat`] for unparseable URLs, and
/// [`UrlNormalizationError::UnsupportedScheme`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// // Default scheme
/// assert_eq!(
///     normalize_url("example.com/page").unwrap(),
///     "https://example.com/page"
/// );
///
/// // Case normalization
/// assert_eq!(
///     normalize_url("HTTPS://EXAMPLE.COM/Path").unwrap(),
///     "https://example.com/Path"
/// );
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Empty);
    }

    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME}://{trimmed}")
    };

    let url =
        Url::parse(&candidate).map_err(|e| UrlNormalizationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlNormalizationError::UnsupportedScheme),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlNormalizationError::MissingHost),
    }

    Ok(url.to_string())
}
