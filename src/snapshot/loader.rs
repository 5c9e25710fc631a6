//! HDF5 snapshot reading
//!
//! A snapshot carries two file-level attributes (`dims`, `gamma`) and one
//! dataset per conserved field. Internal energy (`GasEnergy`) is only written
//! by runs with dual energy enabled; which runs those were is recorded in the
//! optional `dual_energy` attribute.

use super::error::{Result, SnapshotError};
use hdf5::File;
use std::path::{Path, PathBuf};

pub const ATTR_DIMS: &str = "dims";
pub const ATTR_GAMMA: &str = "gamma";
pub const ATTR_DUAL_ENERGY: &str = "dual_energy";

pub const FIELD_DENSITY: &str = "density";
pub const FIELD_MOMENTUM_X: &str = "momentum_x";
pub const FIELD_MOMENTUM_Y: &str = "momentum_y";
pub const FIELD_MOMENTUM_Z: &str = "momentum_z";
pub const FIELD_ENERGY: &str = "Energy";
pub const FIELD_GAS_ENERGY: &str = "GasEnergy";

/// Where a snapshot's internal energy comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DualEnergy {
    /// Follow the snapshot: the `dual_energy` attribute if present,
    /// otherwise whether `GasEnergy` exists
    #[default]
    Auto,
    /// `GasEnergy` must be present and is used for pressure
    On,
    /// `GasEnergy` is ignored, pressure comes from total energy
    Off,
}

impl DualEnergy {
    /// Parse from string value
    ///
    /// Validation against the allowed values happens in the property reader.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "on" => Self::On,
            "off" => Self::Off,
            _ => Self::Auto,
        }
    }
}

impl std::fmt::Display for DualEnergy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Auto => "auto",
            Self::On => "on",
            Self::Off => "off",
        };
        f.write_str(s)
    }
}

/// Grid extents in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDims {
    pub nx: usize,
    pub ny: usize,
    pub nz: usize,
}

impl GridDims {
    pub fn new_1d(nx: usize) -> Self {
        Self { nx, ny: 1, nz: 1 }
    }

    pub fn n_cells(&self) -> usize {
        self.nx * self.ny * self.nz
    }

    /// Build from the raw `dims` attribute (stored as floats by some writers)
    fn from_raw(values: &[f64]) -> std::result::Result<Self, String> {
        if values.len() != 3 {
            return Err(format!("expected 3 values, found {}", values.len()));
        }

        let mut extents = [0usize; 3];
        for (extent, &v) in extents.iter_mut().zip(values) {
            if !v.is_finite() || v < 1.0 || v.fract() != 0.0 {
                return Err(format!("extent {} is not a positive whole number", v));
            }
            if v >= usize::MAX as f64 {
                return Err(format!("extent {} overflows usize", v));
            }
            *extent = v as usize;
        }

        extents
            .iter()
            .try_fold(1usize, |acc, &n| acc.checked_mul(n))
            .ok_or_else(|| format!("cell count {:?} overflows usize", values))?;

        Ok(Self {
            nx: extents[0],
            ny: extents[1],
            nz: extents[2],
        })
    }
}

/// One simulation output, fully materialized in memory
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub path: PathBuf,
    pub dims: GridDims,
    /// Adiabatic index
    pub gamma: f64,
    pub density: Vec<f64>,
    pub momentum_x: Vec<f64>,
    pub momentum_y: Vec<f64>,
    pub momentum_z: Vec<f64>,
    /// Total energy density
    pub energy: Vec<f64>,
    /// Internal energy density, only when dual energy was in effect
    pub gas_energy: Option<Vec<f64>>,
    /// Value of the `dual_energy` attribute, if the file had one
    pub dual_energy_flag: Option<bool>,
}

impl Snapshot {
    /// Read a snapshot file
    ///
    /// The HDF5 handle is closed before returning, on success or failure.
    pub fn open(path: impl AsRef<Path>, dual_energy: DualEnergy) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SnapshotError::NotFound(path.to_path_buf()));
        }

        let file = File::open(path)?;
        match read_snapshot(&file, path, dual_energy) {
            Ok(snapshot) => {
                file.close()?;
                Ok(snapshot)
            }
            Err(e) => {
                // The read error is the one worth reporting
                if let Err(close_err) = file.close() {
                    tracing::warn!(path = %path.display(), "closing snapshot failed: {}", close_err);
                }
                Err(e)
            }
        }
    }

    pub fn n_cells(&self) -> usize {
        self.dims.n_cells()
    }
}

fn read_snapshot(file: &File, path: &Path, dual_energy: DualEnergy) -> Result<Snapshot> {
    let attr_names = file.attr_names()?;

    let raw_dims = read_attr(file, path, &attr_names, ATTR_DIMS)?;
    let dims = GridDims::from_raw(&raw_dims).map_err(|reason| SnapshotError::InvalidAttribute {
        path: path.to_path_buf(),
        name: ATTR_DIMS.to_string(),
        reason,
    })?;

    let gamma = read_attr(file, path, &attr_names, ATTR_GAMMA)?
        .first()
        .copied()
        .ok_or_else(|| SnapshotError::InvalidAttribute {
            path: path.to_path_buf(),
            name: ATTR_GAMMA.to_string(),
            reason: "empty array".to_string(),
        })?;

    let dual_energy_flag = if attr_names.iter().any(|n| n == ATTR_DUAL_ENERGY) {
        let raw = read_attr(file, path, &attr_names, ATTR_DUAL_ENERGY)?;
        Some(raw.first().is_some_and(|&v| v != 0.0))
    } else {
        None
    };

    let n_cells = dims.n_cells();
    let density = read_field(file, path, FIELD_DENSITY, n_cells)?;
    let momentum_x = read_field(file, path, FIELD_MOMENTUM_X, n_cells)?;
    let momentum_y = read_field(file, path, FIELD_MOMENTUM_Y, n_cells)?;
    let momentum_z = read_field(file, path, FIELD_MOMENTUM_Z, n_cells)?;
    let energy = read_field(file, path, FIELD_ENERGY, n_cells)?;

    let gas_energy = match (dual_energy, dual_energy_flag) {
        (DualEnergy::Off, _) | (DualEnergy::Auto, Some(false)) => None,
        (DualEnergy::On, _) | (DualEnergy::Auto, Some(true)) => {
            Some(read_field(file, path, FIELD_GAS_ENERGY, n_cells)?)
        }
        (DualEnergy::Auto, None) => {
            if file.link_exists(FIELD_GAS_ENERGY) {
                Some(read_field(file, path, FIELD_GAS_ENERGY, n_cells)?)
            } else {
                None
            }
        }
    };

    tracing::debug!(
        path = %path.display(),
        nx = dims.nx,
        ny = dims.ny,
        nz = dims.nz,
        gamma,
        gas_energy = gas_energy.is_some(),
        "snapshot loaded"
    );

    Ok(Snapshot {
        path: path.to_path_buf(),
        dims,
        gamma,
        density,
        momentum_x,
        momentum_y,
        momentum_z,
        energy,
        gas_energy,
        dual_energy_flag,
    })
}

fn read_attr(file: &File, path: &Path, attr_names: &[String], name: &str) -> Result<Vec<f64>> {
    if !attr_names.iter().any(|n| n == name) {
        return Err(SnapshotError::MissingAttribute {
            path: path.to_path_buf(),
            name: name.to_string(),
        });
    }
    Ok(file.attr(name)?.read_raw::<f64>()?)
}

fn read_field(file: &File, path: &Path, name: &str, n_cells: usize) -> Result<Vec<f64>> {
    if !file.link_exists(name) {
        return Err(SnapshotError::MissingField {
            path: path.to_path_buf(),
            name: name.to_string(),
        });
    }

    let values = file.dataset(name)?.read_raw::<f64>()?;
    if values.len() != n_cells {
        return Err(SnapshotError::FieldLength {
            path: path.to_path_buf(),
            name: name.to_string(),
            expected: n_cells,
            found: values.len(),
        });
    }
    Ok(values)
}
