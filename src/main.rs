//! hydro1d_plot - main entry point
//!
//! Plots density, velocity, pressure and specific internal energy for each
//! snapshot given on the command line. With no files, plots
//! `<input-dir>/<snapshot>.h5`.
//!
//! Configuration precedence: command line flags, then `--config` file, then
//! the defaults embedded from plotter.json.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use hydro1d_plot::pipeline;
use hydro1d_plot::properties::{registry, PropertyReader};
use hydro1d_plot::PlotterConfig;

#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

/// Diagnostic plots for 1D hydrodynamics snapshots
#[derive(Parser, Debug)]
#[command(name = "hydro1d_plot", version)]
#[command(about = "Plot density, velocity, pressure and internal energy of 1D hydro snapshots")]
struct Args {
    /// Snapshot files (default: <input-dir>/<snapshot>.h5)
    files: Vec<PathBuf>,

    /// JSON config file with property overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of the default snapshot
    #[arg(long)]
    input_dir: Option<String>,

    /// Directory PNG files are written to
    #[arg(short, long)]
    output_dir: Option<String>,

    /// Snapshot index plotted when no files are given
    #[arg(short, long)]
    snapshot: Option<u32>,

    /// Internal energy source: snapshot metadata, GasEnergy, or total energy
    #[arg(long, value_parser = ["auto", "on", "off"])]
    dual_energy: Option<String>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Marker radius in pixels
    #[arg(long)]
    marker_size: Option<f64>,

    /// Skip tick labels and axis titles
    #[arg(long)]
    no_labels: bool,

    /// Density axis range
    #[arg(long, value_name = "MIN,MAX", allow_hyphen_values = true)]
    density_range: Option<String>,

    /// Velocity axis range
    #[arg(long, value_name = "MIN,MAX", allow_hyphen_values = true)]
    velocity_range: Option<String>,

    /// Pressure axis range
    #[arg(long, value_name = "MIN,MAX", allow_hyphen_values = true)]
    pressure_range: Option<String>,

    /// Internal energy axis range
    #[arg(long, value_name = "MIN,MAX", allow_hyphen_values = true)]
    energy_range: Option<String>,

    /// Print all properties with their defaults and exit
    #[arg(long)]
    list_properties: bool,
}

impl Args {
    /// Layer command line flags over the config file
    fn properties(&self) -> anyhow::Result<PropertyReader> {
        let mut props = match &self.config {
            Some(path) => PropertyReader::from_json_file(path)?,
            None => PropertyReader::new(),
        };

        let flags = [
            ("input.dir", self.input_dir.clone()),
            ("output.dir", self.output_dir.clone()),
            ("snapshot.default", self.snapshot.map(|v| v.to_string())),
            ("dual.energy", self.dual_energy.clone()),
            ("figure.width", self.width.map(|v| v.to_string())),
            ("figure.height", self.height.map(|v| v.to_string())),
            ("marker.size", self.marker_size.map(|v| v.to_string())),
            ("labels", self.no_labels.then(|| "false".to_string())),
            ("range.density", self.density_range.clone()),
            ("range.velocity", self.velocity_range.clone()),
            ("range.pressure", self.pressure_range.clone()),
            ("range.energy", self.energy_range.clone()),
        ];
        for (name, value) in flags {
            if let Some(value) = value {
                props.set(name, value);
            }
        }

        Ok(props)
    }
}

fn main() -> anyhow::Result<()> {
    hydro1d_plot::init_logging();

    let args = Args::parse();

    if args.list_properties {
        print_properties();
        return Ok(());
    }

    let props = args.properties().context("loading configuration")?;
    let config = PlotterConfig::from_properties(&props);

    info!("hydro1d_plot v{}", env!("CARGO_PKG_VERSION"));
    info!("  Output directory: {}", config.output_dir.display());
    info!("  Dual energy: {}", config.dual_energy);
    info!(
        "  Figure: {}×{} px, marker {} px",
        config.style.width, config.style.height, config.style.marker_size
    );

    let reports = pipeline::run(&args.files, &config).context("plotting snapshots")?;

    info!("Plotted {} snapshot(s)", reports.len());
    Ok(())
}

fn print_properties() {
    for prop in registry().properties() {
        match &prop.valid_values {
            Some(values) => println!(
                "{:<18} {:<10} [{}]  {}",
                prop.name,
                prop.default_value,
                values.join("|"),
                prop.description
            ),
            None => println!(
                "{:<18} {:<10} {}",
                prop.name, prop.default_value, prop.description
            ),
        }
    }
}
