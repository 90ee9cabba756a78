//! Exporters turn a computed [`Layout`] into an output document.

pub mod svg;

use thiserror::Error;

use crate::layout::Layout;

/// Turns a layout into a serialized document.
pub trait Exporter {
    fn export_layout(&self, layout: &Layout<'_>) -> Result<String, Error>;
}

#[derive(Debug, Error)]
pub enum Error {
    /// The layout asked for a canvas that cannot be drawn.
    #[error("invalid canvas extents {width}x{height}")]
    Canvas { width: f32, height: f32 },

    #[error("invalid theme: {0}")]
    Theme(String),

    #[error("failed to serialize document: {0}")]
    Format(#[from] std::fmt::Error),
}
