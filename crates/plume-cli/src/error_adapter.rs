//! Error adapter for converting [`PlumeError`] to miette diagnostics.
//!
//! Rendering never reports source positions, so every error becomes a
//! single diagnostic carrying a stable code.

use std::fmt;

use miette::{Diagnostic, LabeledSpan};

use plume::PlumeError;

/// Wraps a [`PlumeError`] so miette can render it.
pub struct ErrorAdapter<'a>(pub &'a PlumeError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            PlumeError::Io(_) => "plume::io",
            PlumeError::Config(_) => "plume::config",
            PlumeError::Render(_) => "plume::render",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0 {
            PlumeError::Config(_) => "check the [style] section of the configuration file",
            PlumeError::Render(_) => "simplify the diagram and try again",
            PlumeError::Io(_) => return None,
        };
        Some(Box::new(help))
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    fn code(err: &PlumeError) -> String {
        ErrorAdapter(err).code().unwrap().to_string()
    }

    #[test]
    fn test_codes() {
        assert_eq!(
            code(&PlumeError::Io(io::Error::other("boom"))),
            "plume::io"
        );
        assert_eq!(code(&PlumeError::Config("bad".to_string())), "plume::config");
        assert_eq!(code(&PlumeError::Render("bad".to_string())), "plume::render");
    }

    #[test]
    fn test_message_passthrough() {
        let err = PlumeError::Render("canvas is 0x0".to_string());
        assert_eq!(
            ErrorAdapter(&err).to_string(),
            "Failed to render diagram: canvas is 0x0"
        );
    }

    #[test]
    fn test_help_only_for_actionable_errors() {
        assert!(ErrorAdapter(&PlumeError::Io(io::Error::other("x"))).help().is_none());
        assert!(
            ErrorAdapter(&PlumeError::Config("x".to_string()))
                .help()
                .is_some()
        );
    }
}
