//! Four-panel diagnostic figure
//!
//! Layout (2x2):
//! ```text
//! Density   | Velocity
//! Pressure  | Internal Energy
//! ```
//! Each panel shares the x axis `[0, nx]` with one marker per cell.

use super::style::{AxisRange, FigureStyle, PanelRanges};
use super::RenderError;
use crate::snapshot::{DerivedFields, Snapshot};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Per-cell series shown in the figure
#[derive(Debug, Clone, Copy)]
pub struct PanelSet<'a> {
    pub density: &'a [f64],
    pub velocity: &'a [f64],
    pub pressure: &'a [f64],
    pub specific_internal_energy: &'a [f64],
}

impl<'a> PanelSet<'a> {
    /// Density from the snapshot, x-velocity and the rest from the derived fields
    pub fn from_fields(snapshot: &'a Snapshot, derived: &'a DerivedFields) -> Self {
        Self {
            density: &snapshot.density,
            velocity: &derived.velocity_x,
            pressure: &derived.pressure,
            specific_internal_energy: &derived.specific_internal_energy,
        }
    }

    /// Panels in drawing order (row-major)
    fn panels(&self, ranges: &PanelRanges) -> [Panel<'a>; 4] {
        [
            Panel {
                label: "Density",
                values: self.density,
                range: ranges.density,
            },
            Panel {
                label: "Velocity",
                values: self.velocity,
                range: ranges.velocity,
            },
            Panel {
                label: "Pressure",
                values: self.pressure,
                range: ranges.pressure,
            },
            Panel {
                label: "Internal Energy",
                values: self.specific_internal_energy,
                range: ranges.energy,
            },
        ]
    }
}

struct Panel<'a> {
    label: &'static str,
    values: &'a [f64],
    range: AxisRange,
}

/// Draw the four panels and write a PNG to `path`, replacing any existing file
///
/// Fails with `InvalidRange` before touching `path` if any panel range is
/// empty, reversed or not finite.
pub fn render_figure(
    path: &Path,
    nx: usize,
    panels: &PanelSet<'_>,
    style: &FigureStyle,
) -> Result<(), RenderError> {
    if nx == 0 {
        return Err(RenderError::EmptyGrid);
    }
    style.ranges.validate()?;

    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let areas = root.split_evenly((2, 2));
    for (area, panel) in areas.iter().zip(panels.panels(&style.ranges)) {
        draw_panel(area, nx, &panel, style)?;
    }

    root.present().map_err(draw_err)?;
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    nx: usize,
    panel: &Panel<'_>,
    style: &FigureStyle,
) -> Result<(), RenderError> {
    let (width, height) = area.dim_in_pixel();
    let font_size = (height / 18).max(8);
    let (x_label_area, y_label_area) = if style.labels {
        (height / 8, width / 5)
    } else {
        (0, 0)
    };

    let mut chart = ChartBuilder::on(area)
        .margin(width.min(height) / 20)
        .x_label_area_size(x_label_area)
        .y_label_area_size(y_label_area)
        .build_cartesian_2d(0.0..nx as f64, panel.range.as_range())
        .map_err(draw_err)?;

    // Axes and tick labels need fonts; the box below frames the panel either way
    if style.labels {
        chart
            .configure_mesh()
            .disable_mesh()
            .y_desc(panel.label)
            .label_style(("sans-serif", font_size))
            .axis_desc_style(("sans-serif", font_size))
            .draw()
            .map_err(draw_err)?;
    }

    // Boxed panel
    let (x_max, y) = (nx as f64, panel.range);
    chart
        .plotting_area()
        .draw(&Rectangle::new(
            [(0.0, y.min), (x_max, y.max)],
            BLACK.stroke_width(1),
        ))
        .map_err(draw_err)?;

    // Out-of-range cells are left off rather than drawn over the axes
    chart
        .draw_series(
            panel
                .values
                .iter()
                .enumerate()
                .filter(|(_, v)| panel.range.contains(**v))
                .map(|(i, v)| Circle::new((i as f64, *v), style.marker_size, BLACK.filled())),
        )
        .map_err(draw_err)?;

    Ok(())
}

fn draw_err(e: impl std::fmt::Display) -> RenderError {
    RenderError::Draw(e.to_string())
}
