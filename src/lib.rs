//! 1D hydro snapshot plotter
//!
//! Reads HDF5 snapshots of conserved fields (density, momentum, energy),
//! derives velocity, pressure and specific internal energy with the ideal-gas
//! equation of state, and renders a four-panel PNG per snapshot.
//!
//! Module organization:
//! - `snapshot`: HDF5 reading/writing and derived quantities
//! - `render`: plotters figure
//! - `pipeline`: load → derive → render per input file
//! - `config` / `properties`: configuration with defaults from plotter.json

pub mod config;
pub mod error;
pub mod pipeline;
pub mod profiling;
pub mod properties;
pub mod render;
pub mod snapshot;

pub use config::PlotterConfig;
pub use error::{PlotterError, Result};

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize logging with a default filter
///
/// `RUST_LOG` overrides the default (`info`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(false).init();
}
