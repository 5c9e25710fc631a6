//! Plotter configuration
//!
//! Built from a `PropertyReader`, so every default comes from plotter.json.
//! The config is passed explicitly through the pipeline; nothing here is
//! process-wide state.

use crate::properties::PropertyReader;
use crate::render::{FigureStyle, PanelRanges};
use crate::snapshot::DualEnergy;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct PlotterConfig {
    /// Where the default snapshot is looked up when no files are given
    pub input_dir: PathBuf,

    /// Where PNG files are written (created if absent)
    pub output_dir: PathBuf,

    /// Snapshot index used when no files are given
    pub default_snapshot: u32,

    /// Source of internal energy
    pub dual_energy: DualEnergy,

    pub style: FigureStyle,
}

impl PlotterConfig {
    /// Create config from properties
    pub fn from_properties(props: &PropertyReader) -> Self {
        let input_dir = PathBuf::from(props.get_string("input.dir"));
        let output_dir = PathBuf::from(props.get_string("output.dir"));
        let default_snapshot = props.get_u32("snapshot.default");
        let dual_energy = DualEnergy::parse(&props.get_enum("dual.energy"));

        let style = FigureStyle {
            width: props.get_pixels("figure.width"),
            height: props.get_pixels("figure.height"),
            marker_size: props.get_f64_in_range("marker.size", 0.0, 100.0).round() as u32,
            labels: props.get_bool("labels"),
            ranges: PanelRanges {
                density: props.get_range("range.density"),
                velocity: props.get_range("range.velocity"),
                pressure: props.get_range("range.pressure"),
                energy: props.get_range("range.energy"),
            },
        };

        Self {
            input_dir,
            output_dir,
            default_snapshot,
            dual_energy,
            style,
        }
    }
}

impl Default for PlotterConfig {
    fn default() -> Self {
        Self::from_properties(&PropertyReader::new())
    }
}
