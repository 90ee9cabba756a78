//! Semantic diagram model types.
//!
//! These types are what the parser extracts from source text and what the
//! layout engines consume. Each [`DiagramKind`] has its own entity and relation
//! shapes; [`Diagram`] is the tagged union selected once per render.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ normalize
//! Lines
//!     ↓ classify
//! DiagramKind
//!     ↓ per-kind parser
//! Semantic Model (these types)
//!     ↓ per-kind layout
//! Positioned Elements
//!     ↓ export
//! SVG
//! ```

mod activity;
mod class;
mod component;
mod diagram;
mod gantt;
mod mindmap;
mod relation;
mod sequence;
mod usecase;

pub use activity::*;
pub use class::*;
pub use component::*;
pub use diagram::*;
pub use gantt::*;
pub use mindmap::*;
pub use relation::*;
pub use sequence::*;
pub use usecase::*;
