//! Plume - an offline renderer for a subset of PlantUML.
//!
//! Source text is normalized, classified into one of seven diagram kinds (or
//! the generic fallback), parsed into a semantic model, laid out with fixed
//! formulas and emitted as a standalone SVG document. Rendering is pure:
//! the same input always yields the same markup.
//!
//! ```
//! let svg = plume::render("@startuml\nAlice -> Bob : Hello\n@enduml").unwrap();
//! assert!(svg.contains("class=\"participant\""));
//! ```

pub mod config;

mod error;
mod export;
mod layout;

pub use plume_core::{color, draw, geometry, semantic};
pub use plume_parser::{RULES, Rule, classify, normalize};

pub use error::PlumeError;

use log::{debug, info, trace};

use config::AppConfig;
use export::Exporter;
use layout::Layout;

/// Builder for parsing and rendering Plume diagrams.
///
/// # Examples
///
/// ```
/// use plume::{DiagramBuilder, config::AppConfig};
///
/// let source = "@startuml\nclass User {\n-name : String\n}\n@enduml";
/// let builder = DiagramBuilder::new(AppConfig::default());
///
/// let diagram = builder.parse(source);
/// assert_eq!(diagram.kind(), plume::semantic::DiagramKind::Class);
///
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.starts_with("<svg"));
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    config: AppConfig,
}

impl DiagramBuilder {
    /// Create a new diagram builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Classify and parse source text into a semantic diagram.
    ///
    /// Parsing never fails: unrecognized lines are ignored and unclassifiable
    /// input becomes a [`semantic::Diagram::Generic`].
    pub fn parse(&self, source: &str) -> semantic::Diagram {
        let diagram = plume_parser::parse(source);
        trace!(diagram:? = diagram; "Parsed diagram");
        diagram
    }

    /// Lay out a semantic diagram and emit it as an SVG string.
    ///
    /// # Errors
    ///
    /// Returns [`PlumeError::Config`] when the configured style is invalid,
    /// and [`PlumeError::Render`] when layout produces a canvas that cannot
    /// be drawn or serialization fails.
    pub fn render_svg(&self, diagram: &semantic::Diagram) -> Result<String, PlumeError> {
        info!(kind = diagram.kind().name(); "Rendering diagram");

        let style = self.config.style();
        let background = style.background_color().map_err(PlumeError::Config)?;
        let exporter = export::svg::SvgBuilder::new()
            .with_background(background)
            .with_font_family(style.font_family())
            .build()?;

        let layout = Layout::from_diagram(diagram);
        let svg = exporter.export_layout(&layout)?;

        debug!(bytes = svg.len(); "SVG rendered successfully");
        Ok(svg)
    }

    /// Parse and render in one step.
    pub fn render(&self, source: &str) -> Result<String, PlumeError> {
        let diagram = self.parse(source);
        self.render_svg(&diagram)
    }
}

/// Render source text with the default configuration.
///
/// # Errors
///
/// Only an internal fault in layout or emission fails; see
/// [`DiagramBuilder::render_svg`].
pub fn render(source: &str) -> Result<String, PlumeError> {
    DiagramBuilder::default().render(source)
}
