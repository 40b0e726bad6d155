//! Chart selection and rendering.
//!
//! Selection is an explicit rule table over the query label (see [`rules`]);
//! rendering hands the directive and the table to plotters and returns an SVG
//! document. The two concerns are independently testable.

mod render;
mod rules;

pub use render::render;
pub use rules::{Classification, Rule, RuleSet, RulesetKind};

use serde::Serialize;

use crate::table::ResultTable;

/// The shape of chart to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Bar,
    Pie,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
        }
    }
}

/// Color scheme for a chart, named after the palettes the dashboard uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Palette {
    /// Blue-to-red diverging scheme, used for revenue and profit questions.
    Coolwarm,
    /// Purple-to-yellow sequential scheme, the fallback.
    Viridis,
}

/// Error type for rendering.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Result has {found} column(s); a chart needs a category column and a value column")]
    NotEnoughColumns { found: usize },

    #[error("Column '{column}' has non-numeric values and cannot be charted")]
    NonNumeric { column: String },

    #[error("Result has no rows to chart")]
    EmptyTable,

    #[error("Chart backend error: {0}")]
    Backend(String),
}

/// Resolved instructions for drawing one chart.
///
/// Derived from the label text and the table's first two columns only, a
/// positional contract: whatever the query returns, column 0 is the category
/// axis and column 1 the measure. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDirective {
    pub kind: ChartKind,
    pub palette: Palette,
    pub x_column: String,
    pub y_column: String,
    pub title: String,
}

impl ChartDirective {
    /// Build the directive for a classified label over a fetched table.
    ///
    /// Fails when the table is too narrow to chart rather than letting the
    /// plotting backend trip over a missing column.
    pub fn derive(
        label: &str,
        classification: Classification,
        table: &ResultTable,
    ) -> Result<Self, RenderError> {
        if table.column_count() < 2 {
            return Err(RenderError::NotEnoughColumns {
                found: table.column_count(),
            });
        }
        Ok(Self {
            kind: classification.kind,
            palette: classification.palette,
            x_column: table.columns[0].clone(),
            y_column: table.columns[1].clone(),
            title: label.to_string(),
        })
    }
}

/// A rendered chart: an SVG document ready to embed in the page.
#[derive(Debug, Clone)]
pub struct RenderedFigure {
    pub svg: String,
}
