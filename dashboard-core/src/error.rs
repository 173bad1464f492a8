use thiserror::Error;

use crate::source::SourceId;

/// A failed fetch from one of the remote sources.
///
/// Carries which source failed so callers can record the failure against the
/// right snapshot without inspecting the cause.
#[derive(Debug, Error)]
#[error("{origin} fetch failed: {cause:#}")]
pub struct FetchError {
    pub origin: SourceId,
    pub cause: anyhow::Error,
}

impl FetchError {
    pub fn new(origin: SourceId, cause: anyhow::Error) -> Self {
        Self { origin, cause }
    }
}

/// Tags an `anyhow::Result` with the source it came from.
pub(crate) trait FetchResultExt<T> {
    fn from_source(self, origin: SourceId) -> Result<T, FetchError>;
}

impl<T> FetchResultExt<T> for anyhow::Result<T> {
    fn from_source(self, origin: SourceId) -> Result<T, FetchError> {
        self.map_err(|cause| FetchError::new(origin, cause))
    }
}
