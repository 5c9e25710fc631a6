//! HDF5 snapshot writing, in the layout the loader reads
//!
//! Used by the `sod_snapshot` binary and by tests.

use super::error::Result;
use super::loader::{
    GridDims, Snapshot, ATTR_DIMS, ATTR_DUAL_ENERGY, ATTR_GAMMA, FIELD_DENSITY, FIELD_ENERGY,
    FIELD_GAS_ENERGY, FIELD_MOMENTUM_X, FIELD_MOMENTUM_Y, FIELD_MOMENTUM_Z,
};
use hdf5::File;
use std::path::{Path, PathBuf};

impl Snapshot {
    /// Write this snapshot to `path`, replacing any existing file
    pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path.as_ref())?;

        let dims = [
            self.dims.nx as f64,
            self.dims.ny as f64,
            self.dims.nz as f64,
        ];
        file.new_attr::<f64>()
            .shape(3)
            .create(ATTR_DIMS)?
            .write_raw(dims.as_slice())?;
        file.new_attr::<f64>()
            .shape(1)
            .create(ATTR_GAMMA)?
            .write_raw([self.gamma].as_slice())?;

        if let Some(flag) = self.dual_energy_flag {
            file.new_attr::<i32>()
                .shape(1)
                .create(ATTR_DUAL_ENERGY)?
                .write_raw([i32::from(flag)].as_slice())?;
        }

        let mut fields = vec![
            (FIELD_DENSITY, &self.density),
            (FIELD_MOMENTUM_X, &self.momentum_x),
            (FIELD_MOMENTUM_Y, &self.momentum_y),
            (FIELD_MOMENTUM_Z, &self.momentum_z),
            (FIELD_ENERGY, &self.energy),
        ];
        if let Some(gas_energy) = &self.gas_energy {
            fields.push((FIELD_GAS_ENERGY, gas_energy));
        }

        for (name, values) in fields {
            file.new_dataset_builder()
                .with_data(values.as_slice())
                .create(name)?;
        }

        file.close()?;
        Ok(())
    }
}

/// Sod shock tube initial state
///
/// Left half `d=1, p=1`, right half `d=0.125, p=0.1`, gas at rest.
/// With `dual_energy` the internal energy is stored as `GasEnergy` and the
/// `dual_energy` attribute is set.
pub fn sod_shock_tube(nx: usize, gamma: f64, dual_energy: bool) -> Snapshot {
    let (density, pressure): (Vec<f64>, Vec<f64>) = (0..nx)
        .map(|i| if 2 * i < nx { (1.0, 1.0) } else { (0.125, 0.1) })
        .unzip();

    // At rest: total energy is all internal energy
    let energy: Vec<f64> = pressure.iter().map(|p| p / (gamma - 1.0)).collect();

    Snapshot {
        path: PathBuf::new(),
        dims: GridDims::new_1d(nx),
        gamma,
        density,
        momentum_x: vec![0.0; nx],
        momentum_y: vec![0.0; nx],
        momentum_z: vec![0.0; nx],
        gas_energy: dual_energy.then(|| energy.clone()),
        energy,
        dual_energy_flag: dual_energy.then_some(true),
    }
}
