//! PNG rendering with plotters
//!
//! - `figure.rs`: the four-panel figure
//! - `style.rs`: image size, marker size and axis ranges

pub mod figure;
pub mod style;

pub use figure::{render_figure, PanelSet};
pub use style::{AxisRange, FigureStyle, PanelRanges};

use thiserror::Error;

/// Errors that can occur while drawing a figure
#[derive(Debug, Error)]
pub enum RenderError {
    /// plotters backend error (drawing or PNG encoding)
    #[error("drawing error: {0}")]
    Draw(String),

    /// Axis range is empty, reversed or not finite
    #[error("invalid axis range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    /// Nothing to plot
    #[error("grid has no cells")]
    EmptyGrid,
}
