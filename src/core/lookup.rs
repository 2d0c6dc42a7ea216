//! External lantern translation lookup
//!
//! The one network dependency of the library: asking a tile library host
//! whether a translation exists. Validators only see the [`TranslationLookup`]
//! trait, so tests substitute a stub and callers choose their own transport.

use crate::core::error::{Field, ValidationError, ValidationResult};
use log::warn;
use std::time::Duration;
use thiserror::Error;

/// Timeout applied to every translation request
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(1);

/// Why a translation lookup failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The host could not be reached or the request timed out
    #[error("{0}")]
    Transport(String),

    /// The host answered with a non-2xx status
    #[error("tile library host answered {status}: {body}")]
    Status { status: u16, body: String },
}

/// Capability to check that a translation exists at `host` + `path`
pub trait TranslationLookup {
    fn check_translation(&self, host: &str, path: &str) -> Result<(), LookupError>;
}

impl<F> TranslationLookup for F
where
    F: Fn(&str, &str) -> Result<(), LookupError>,
{
    fn check_translation(&self, host: &str, path: &str) -> Result<(), LookupError> {
        self(host, path)
    }
}

/// URL queried for a translation
pub fn translation_url(host: &str, path: &str) -> String {
    format!("http://{}{}", host, path)
}

/// Check a lantern translation against an external tile library
///
/// Transport failures are reported under `tile_library_host`; a non-2xx answer
/// under `tile_library_int-tile_library_host` with the response body. No retries.
pub fn validate_lantern_translation_outside_database<L>(
    lookup: &L,
    tile_library_host: &str,
    tile_library_path: &str,
) -> ValidationResult<()>
where
    L: TranslationLookup + ?Sized,
{
    lookup
        .check_translation(tile_library_host, tile_library_path)
        .map_err(|e| {
            warn!(
                "Translation lookup {} failed: {}",
                translation_url(tile_library_host, tile_library_path),
                e
            );
            match e {
                LookupError::Transport(message) => {
                    ValidationError::field(Field::TileLibraryHost, message)
                }
                LookupError::Status { body, .. } => {
                    ValidationError::field(Field::TileLibraryIntHost, body)
                }
            }
        })
}

/// Blocking HTTP lookup over `ureq`
#[cfg(feature = "http")]
pub struct HttpTranslationLookup {
    agent: ureq::Agent,
}

#[cfg(feature = "http")]
impl HttpTranslationLookup {
    pub fn new() -> Self {
        Self::with_timeout(LOOKUP_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent }
    }
}

#[cfg(feature = "http")]
impl Default for HttpTranslationLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "http")]
impl TranslationLookup for HttpTranslationLookup {
    fn check_translation(&self, host: &str, path: &str) -> Result<(), LookupError> {
        let url = translation_url(host, path);
        log::debug!("GET {}", url);

        match self.agent.get(&url).call() {
            Ok(response) => {
                let status = response.status();
                if (200..300).contains(&status) {
                    Ok(())
                } else {
                    let body = response.into_string().unwrap_or_default();
                    Err(LookupError::Status { status, body })
                }
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(LookupError::Status { status, body })
            }
            Err(ureq::Error::Transport(transport)) => {
                Err(LookupError::Transport(transport.to_string()))
            }
        }
    }
}
