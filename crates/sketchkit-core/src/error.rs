//! Error handling for SketchKit
//!
//! Layout and bounds computations never fail; errors only arise at the edges
//! where a sketch meets a real backend or the filesystem:
//! - Render errors (canvas allocation, image encoding)
//! - I/O errors
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Render error type
///
/// Represents failures of a concrete drawing backend.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The backend could not allocate a canvas of the requested size
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// The rendered image could not be encoded
    #[error("Failed to encode image: {reason}")]
    Encode {
        /// The reason reported by the encoder.
        reason: String,
    },
}

/// Main error type for SketchKit
#[derive(Error, Debug)]
pub enum Error {
    /// Render error
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        let err = RenderError::InvalidCanvas {
            width: 0,
            height: 600,
        };
        assert_eq!(err.to_string(), "Invalid canvas size 0x600");

        let err = RenderError::Encode {
            reason: "out of memory".to_string(),
        };
        assert_eq!(err.to_string(), "Failed to encode image: out of memory");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = RenderError::InvalidCanvas {
            width: 1,
            height: 0,
        }
        .into();
        assert!(matches!(err, Error::Render(_)));
        assert_eq!(err.to_string(), "Invalid canvas size 1x0");

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
