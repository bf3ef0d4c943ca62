//! # Error Types
//!
//! This module defines error types used throughout the ticketpress library.
//!
//! Template rendering never fails: malformed control codes degrade to literal
//! text. Only the image encoder and the outer surfaces (CLI, HTTP server)
//! produce errors.

use thiserror::Error;

/// Errors produced while turning an uploaded image into raster control codes.
///
/// The `Display` messages are short and user-facing; the HTTP layer sends
/// them back verbatim.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    /// The file is not one of the accepted raster formats
    #[error("Unsupported image type '{0}'. Use PNG, JPEG, BMP or GIF")]
    UnsupportedFormat(String),

    /// The file exceeds the configured size limit
    #[error("Image is too large ({size} bytes). Maximum allowed is {max} bytes")]
    TooLarge { size: usize, max: usize },

    /// No bytes were supplied
    #[error("Image file is empty")]
    Empty,

    /// The bytes could not be decoded as an image
    #[error("Could not read image: {0}")]
    Decode(String),
}

/// Main error type for ticketpress operations
#[derive(Debug, Error)]
pub enum TicketError {
    /// Image encoding error
    #[error("Image error: {0}")]
    Encode(#[from] EncodeError),

    /// A template document could not be read
    #[error("Template error: {0}")]
    Template(String),

    /// A printer profile document could not be read
    #[error("Printer profile error: {0}")]
    Profile(String),

    /// HTTP server error (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_too_large_message() {
        let err = EncodeError::TooLarge {
            size: 2_000_000,
            max: 1_048_576,
        };
        assert_eq!(
            err.to_string(),
            "Image is too large (2000000 bytes). Maximum allowed is 1048576 bytes"
        );
    }

    #[test]
    fn test_encode_error_converts() {
        let err: TicketError = EncodeError::Empty.into();
        assert!(matches!(err, TicketError::Encode(EncodeError::Empty)));
        assert_eq!(err.to_string(), "Image error: Image file is empty");
    }
}
