//! Link creation and redirect resolution service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use crate::utils::url_normalizer::normalize_url;

/// Maximum attempts to find an unused short code before giving up.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Service implementing the two operations of the system: shorten a URL and
/// resolve a short code while counting the click.
///
/// The repository is injected, so the service never touches a concrete
/// storage client.
pub struct LinkService<R: LinkRepository> {
    repository: Arc<R>,
    base_url: String,
    code_length: usize,
}

impl<R: LinkRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public address short URLs are built from; a trailing
    /// slash is tolerated. `code_length` is the length of generated codes.
    pub fn new(repository: Arc<R>, base_url: String, code_length: usize) -> Self {
        Self {
            repository,
            base_url: base_url.trim_end_matches('/').to_string(),
            code_length,
        }
    }

    /// Shortens a URL.
    ///
    /// The input is trimmed and, when it carries no scheme prefix, `https://`
    /// is prepended before validation. Only `http` and `https` URLs with a
    /// non-empty host are accepted.
    ///
    /// # Code Generation
    ///
    /// The code is a hash of the normalized URL mixed with a random
    /// per-request seed, truncated to the configured length. On a code
    /// collision the insert is retried with a fresh code, up to
    /// [`MAX_CODE_ATTEMPTS`] times.
    ///
    /// Shortening the same URL twice creates two independent links; the
    /// random seed makes the codes differ.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for invalid input and
    /// [`AppError::Internal`] on storage errors or when no free code is
    /// found.
    pub async fn shorten(&self, url: &str) -> Result<Link, AppError> {
        let normalized_url =
            normalize_url(url).map_err(|e| AppError::bad_request(e.to_string()))?;

        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = generate_code(&normalized_url, self.code_length);

            let inserted = self
                .repository
                .try_insert(NewLink {
                    short_code: code,
                    original_url: normalized_url.clone(),
                })
                .await?;

            if let Some(link) = inserted {
                return Ok(link);
            }
        }

        Err(AppError::internal("Failed to generate a unique short code"))
    }

    /// Resolves a short code to its link and counts the click.
    ///
    /// The increment is an atomic add in storage, issued after the lookup.
    /// There are no idempotency keys; a retried request counts again
    /// (at-least-once).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is unknown and
    /// [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Short URL not found"))?;

        self.repository.increment_clicks(code).await?;

        Ok(link)
    }

    /// Constructs the fully qualified short URL for a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
