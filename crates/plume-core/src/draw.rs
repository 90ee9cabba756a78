//! Visual definitions used by the SVG emitter.
//!
//! - [`StrokeDefinition`] and the [`apply_stroke!`](crate::apply_stroke!) macro for lines and borders
//! - [`TextDefinition`] and [`Text`] for labels
//! - [`RenderLayer`] and [`LayeredOutput`] for z-ordering emitted nodes

mod layer;
mod stroke;
mod text;

pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use stroke::{StrokeDefinition, StrokeStyle};
pub use text::{Text, TextAnchor, TextDefinition};
