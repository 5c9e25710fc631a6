//! Sod shock tube snapshot generator
//!
//! Writes the initial state of the Sod test in the snapshot layout read by
//! `hydro1d_plot`, for trying the plotter without a simulation run.
//!
//! Usage:
//! ```bash
//! cargo run --bin sod_snapshot -- --nx 100 ./hdf5/0.h5
//! cargo run --bin hydro1d_plot
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use hydro1d_plot::snapshot::sod_shock_tube;

#[derive(Parser, Debug)]
#[command(name = "sod_snapshot")]
#[command(about = "Write a Sod shock tube initial-condition snapshot")]
struct Args {
    /// Output HDF5 file
    #[arg(default_value = "./hdf5/0.h5")]
    output: PathBuf,

    /// Number of cells
    #[arg(long, default_value = "100")]
    nx: usize,

    /// Adiabatic index
    #[arg(long, default_value = "1.4")]
    gamma: f64,

    /// Also store GasEnergy and set the dual_energy attribute
    #[arg(long)]
    dual_energy: bool,
}

fn main() -> anyhow::Result<()> {
    hydro1d_plot::init_logging();

    let args = Args::parse();
    anyhow::ensure!(args.nx > 0, "--nx must be at least 1");
    anyhow::ensure!(args.gamma > 1.0, "--gamma must be greater than 1");

    if let Some(parent) = args.output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    let snapshot = sod_shock_tube(args.nx, args.gamma, args.dual_energy);
    snapshot
        .write(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    info!(
        nx = args.nx,
        gamma = args.gamma,
        dual_energy = args.dual_energy,
        "✓ Wrote {}",
        args.output.display()
    );
    Ok(())
}
