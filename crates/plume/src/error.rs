//! Error types for Plume operations.
//!
//! [`PlumeError`] is the single error type returned by the library. Parsing
//! itself never fails; rendering only fails on an internal fault such as a
//! degenerate canvas.

use std::io;

use thiserror::Error;

/// The main error type for Plume operations.
#[derive(Debug, Error)]
pub enum PlumeError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Layout or emission produced something that cannot be drawn.
    #[error("Failed to render diagram: {0}")]
    Render(String),
}

impl From<crate::export::Error> for PlumeError {
    fn from(error: crate::export::Error) -> Self {
        Self::Render(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_message_prefix() {
        let err = PlumeError::Render("canvas is 0x0".to_string());
        assert_eq!(err.to_string(), "Failed to render diagram: canvas is 0x0");
    }

    #[test]
    fn test_export_error_becomes_render() {
        let err = PlumeError::from(crate::export::Error::Canvas {
            width: f32::NAN,
            height: 10.0,
        });
        assert!(matches!(err, PlumeError::Render(_)));
        assert!(err.to_string().starts_with("Failed to render diagram: "));
    }
}
