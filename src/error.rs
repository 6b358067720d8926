//! Error taxonomy for the rendering pipeline.

use thiserror::Error;

/// Failures surfaced by [`ReportRenderer::render`](crate::ReportRenderer::render).
///
/// Rendering has no retries and no partial-output mode: every variant is fatal
/// for the call that produced it and is returned to the caller unmodified.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A font or image resource could not be located or decoded.
    #[error("asset unavailable: {resource}: {detail}")]
    AssetUnavailable {
        /// Human-readable description of the missing resource, including its path.
        resource: String,
        /// Underlying failure reported by the filesystem or decoder.
        detail: String,
    },

    /// A character survived sanitization but cannot be represented in the
    /// single-byte range the writer guarantees.
    #[error("character {character:?} at byte {index} is outside the encodable range")]
    Encoding {
        /// The offending character.
        character: char,
        /// Byte offset of the character within the sanitized string.
        index: usize,
    },

    /// The PDF collaborator failed while assembling or serializing the document.
    #[error("pdf generation failed")]
    Pdf(#[from] genpdf::error::Error),
}

impl RenderError {
    /// Builds an [`RenderError::AssetUnavailable`] from a resource description
    /// and any displayable cause.
    pub fn asset(resource: impl Into<String>, detail: impl ToString) -> Self {
        Self::AssetUnavailable {
            resource: resource.into(),
            detail: detail.to_string(),
        }
    }
}
