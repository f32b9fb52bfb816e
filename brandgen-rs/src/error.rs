//! Error types for the template engine.

use thiserror::Error;

/// Result type alias using TemplateError.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors surfaced by template generation.
///
/// Logo acquisition failures are deliberately absent: they are always
/// recovered with the placeholder tile and never propagate to callers.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// No raster surface could be acquired for the requested dimensions.
    /// Fatal for the call; never retried.
    #[error("No raster surface available for {width}x{height}")]
    SurfaceUnavailable { width: u32, height: u32 },

    /// The supplied id has no matching registry entry.
    #[error("Unknown template config id: {0}")]
    ConfigNotFound(String),

    /// The composited surface could not be serialized. Scoped to a single
    /// template; a batch continues past it.
    #[error("Failed to encode template: {0}")]
    EncodingFailed(String),

    /// Drawing-surface error that is not a dimension problem.
    #[error(transparent)]
    Canvas(#[from] brandgen_canvas2d::CanvasError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        let err = TemplateError::SurfaceUnavailable {
            width: 0,
            height: 10,
        };
        assert!(err.to_string().contains("0x10"));

        let err = TemplateError::ConfigNotFound("nope".into());
        assert!(err.to_string().contains("nope"));

        let err = TemplateError::EncodingFailed("empty result".into());
        assert!(err.to_string().contains("empty result"));
    }
}
