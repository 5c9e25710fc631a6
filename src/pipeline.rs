//! Snapshot plotting pipeline
//!
//! Shared by the CLI and the integration tests. For each input:
//! 1. Load the snapshot
//! 2. Derive velocity, pressure and internal energy
//! 3. Render the four-panel PNG
//!
//! Inputs are processed in order and the first error aborts the run.

use crate::config::PlotterConfig;
use crate::error::{PlotterError, Result};
use crate::profiling::PhaseTimer;
use crate::render::{render_figure, PanelSet};
use crate::snapshot::{DerivedFields, Snapshot};
use std::path::{Path, PathBuf};

/// Extension of rendered figures
pub const PLOT_SUFFIX: &str = "png";

/// Extension of snapshot files
pub const SNAPSHOT_SUFFIX: &str = "h5";

/// Outcome of plotting one snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct PlotReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub n_cells: usize,
    /// Whether pressure came from stored internal energy
    pub used_gas_energy: bool,
}

/// `<input_dir>/<index>.h5`
pub fn default_snapshot_path(input_dir: &Path, index: u32) -> PathBuf {
    input_dir.join(format!("{}.{}", index, SNAPSHOT_SUFFIX))
}

/// Figure path for a snapshot: input basename with the PNG extension, in `output_dir`
///
/// `./hdf5/42.h5` → `./png/42.png`
pub fn output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(".");
    name.push(PLOT_SUFFIX);
    output_dir.join(name)
}

/// Create the output directory tree if it does not exist
pub fn prepare_output_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| PlotterError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::info!(dir = %dir.display(), "created output directory");
    Ok(())
}

/// Load, derive and render one snapshot
///
/// The output directory must already exist.
pub fn plot_snapshot_file(input: &Path, config: &PlotterConfig) -> Result<PlotReport> {
    let mut timer = PhaseTimer::start();

    let snapshot = Snapshot::open(input, config.dual_energy)?;
    timer.mark("load");

    let derived = DerivedFields::from_snapshot(&snapshot);
    timer.mark("derive");

    let output = output_path(input, &config.output_dir);
    let panels = PanelSet::from_fields(&snapshot, &derived);
    render_figure(&output, snapshot.dims.nx, &panels, &config.style)?;
    timer.mark("render");

    let phases: Vec<String> = timer
        .phases()
        .iter()
        .map(|(name, d)| format!("{} {:.3}s", name, d.as_secs_f64()))
        .collect();
    tracing::debug!(
        "{}: {:.3}s total ({})",
        input.display(),
        timer.total().as_secs_f64(),
        phases.join(", ")
    );

    Ok(PlotReport {
        input: input.to_path_buf(),
        output,
        n_cells: snapshot.n_cells(),
        used_gas_energy: snapshot.gas_energy.is_some(),
    })
}

/// Plot every input in order
///
/// With no inputs the default snapshot `<input_dir>/<default_snapshot>.h5`
/// is plotted. The output directory is created once before the first file.
pub fn run(inputs: &[PathBuf], config: &PlotterConfig) -> Result<Vec<PlotReport>> {
    let inputs: Vec<PathBuf> = if inputs.is_empty() {
        vec![default_snapshot_path(
            &config.input_dir,
            config.default_snapshot,
        )]
    } else {
        inputs.to_vec()
    };

    prepare_output_dir(&config.output_dir)?;

    let mut reports = Vec::with_capacity(inputs.len());
    for (i, input) in inputs.iter().enumerate() {
        tracing::info!("[{}/{}] {}", i + 1, inputs.len(), input.display());
        let report = plot_snapshot_file(input, config)?;
        tracing::info!(
            cells = report.n_cells,
            gas_energy = report.used_gas_energy,
            "✓ Saved {}",
            report.output.display()
        );
        reports.push(report);
    }

    Ok(reports)
}
