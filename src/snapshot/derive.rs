//! Primitive quantities from conserved fields (ideal-gas equation of state)
//!
//! All functions work cell by cell and assume nonzero density.

use super::loader::Snapshot;

/// Velocity, pressure and specific internal energy per cell
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedFields {
    pub velocity_x: Vec<f64>,
    pub velocity_y: Vec<f64>,
    pub velocity_z: Vec<f64>,
    pub pressure: Vec<f64>,
    pub specific_internal_energy: Vec<f64>,
}

impl DerivedFields {
    /// Derive from a loaded snapshot
    ///
    /// Pressure uses stored internal energy when the snapshot carries it,
    /// otherwise total energy minus kinetic energy.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let gamma = snapshot.gamma;
        let velocity_x = velocity(&snapshot.momentum_x, &snapshot.density);
        let velocity_y = velocity(&snapshot.momentum_y, &snapshot.density);
        let velocity_z = velocity(&snapshot.momentum_z, &snapshot.density);

        let pressure = match &snapshot.gas_energy {
            Some(gas_energy) => pressure_from_internal_energy(gas_energy, gamma),
            None => pressure_from_total_energy(
                &snapshot.density,
                [&velocity_x, &velocity_y, &velocity_z],
                &snapshot.energy,
                gamma,
            ),
        };

        let specific_internal_energy = specific_internal_energy(&pressure, &snapshot.density, gamma);

        Self {
            velocity_x,
            velocity_y,
            velocity_z,
            pressure,
            specific_internal_energy,
        }
    }
}

/// `v = m / d`
pub fn velocity(momentum: &[f64], density: &[f64]) -> Vec<f64> {
    momentum.iter().zip(density).map(|(m, d)| m / d).collect()
}

/// `p = (E - d|v|^2 / 2)(gamma - 1)`
pub fn pressure_from_total_energy(
    density: &[f64],
    velocity: [&[f64]; 3],
    energy: &[f64],
    gamma: f64,
) -> Vec<f64> {
    let [vx, vy, vz] = velocity;
    density
        .iter()
        .zip(energy)
        .enumerate()
        .map(|(i, (d, e))| {
            let v2 = vx[i] * vx[i] + vy[i] * vy[i] + vz[i] * vz[i];
            (e - 0.5 * d * v2) * (gamma - 1.0)
        })
        .collect()
}

/// `p = e (gamma - 1)` with `e` the internal energy density
pub fn pressure_from_internal_energy(gas_energy: &[f64], gamma: f64) -> Vec<f64> {
    gas_energy.iter().map(|e| e * (gamma - 1.0)).collect()
}

/// `p / d / (gamma - 1)`
pub fn specific_internal_energy(pressure: &[f64], density: &[f64], gamma: f64) -> Vec<f64> {
    pressure
        .iter()
        .zip(density)
        .map(|(p, d)| p / d / (gamma - 1.0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::loader::GridDims;
    use std::path::PathBuf;

    const TOL: f64 = 1e-12;

    fn uniform_snapshot(n: usize) -> Snapshot {
        Snapshot {
            path: PathBuf::from("uniform.h5"),
            dims: GridDims::new_1d(n),
            gamma: 1.4,
            density: vec![1.0; n],
            momentum_x: vec![0.0; n],
            momentum_y: vec![0.0; n],
            momentum_z: vec![0.0; n],
            energy: vec![2.5; n],
            gas_energy: None,
            dual_energy_flag: None,
        }
    }

    fn moving_snapshot() -> Snapshot {
        let density = vec![1.0, 0.5, 0.25, 2.0];
        let vx = [0.3, -0.2, 0.9, 0.0];
        let vy = [0.1, 0.0, -0.4, 0.2];
        let vz = [0.0, 0.05, 0.0, -0.1];
        let internal = vec![2.5, 1.25, 0.4, 3.0];
        let gamma = 5.0 / 3.0;

        let momentum = |v: &[f64]| -> Vec<f64> { density.iter().zip(v).map(|(d, v)| d * v).collect() };
        let energy = (0..density.len())
            .map(|i| {
                internal[i]
                    + 0.5 * density[i] * (vx[i] * vx[i] + vy[i] * vy[i] + vz[i] * vz[i])
            })
            .collect();

        Snapshot {
            path: PathBuf::from("moving.h5"),
            dims: GridDims::new_1d(density.len()),
            gamma,
            momentum_x: momentum(&vx),
            momentum_y: momentum(&vy),
            momentum_z: momentum(&vz),
            density,
            energy,
            gas_energy: Some(internal),
            dual_energy_flag: Some(true),
        }
    }

    fn assert_close(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (i, (x, y)) in a.iter().zip(b).enumerate() {
            assert!((x - y).abs() < TOL, "cell {}: {} != {}", i, x, y);
        }
    }

    #[test]
    fn test_uniform_gas_at_rest() {
        let derived = DerivedFields::from_snapshot(&uniform_snapshot(10));

        assert_close(&derived.velocity_x, &[0.0; 10]);
        assert_close(&derived.pressure, &[1.0; 10]);
        assert_close(&derived.specific_internal_energy, &[2.5; 10]);
    }

    #[test]
    fn test_velocity_times_density_recovers_momentum() {
        let snapshot = moving_snapshot();
        let derived = DerivedFields::from_snapshot(&snapshot);

        for (v, m) in [
            (&derived.velocity_x, &snapshot.momentum_x),
            (&derived.velocity_y, &snapshot.momentum_y),
            (&derived.velocity_z, &snapshot.momentum_z),
        ] {
            let recovered: Vec<f64> = v.iter().zip(&snapshot.density).map(|(v, d)| v * d).collect();
            assert_close(&recovered, m);
        }
    }

    #[test]
    fn test_pressure_paths_agree() {
        let mut snapshot = moving_snapshot();
        let with_gas_energy = DerivedFields::from_snapshot(&snapshot);

        snapshot.gas_energy = None;
        let from_total = DerivedFields::from_snapshot(&snapshot);

        assert_close(&with_gas_energy.pressure, &from_total.pressure);
        assert_close(
            &with_gas_energy.specific_internal_energy,
            &from_total.specific_internal_energy,
        );
    }

    #[test]
    fn test_specific_internal_energy_relation() {
        let snapshot = moving_snapshot();
        let derived = DerivedFields::from_snapshot(&snapshot);
        let gamma = snapshot.gamma;

        for i in 0..snapshot.n_cells() {
            let expected = derived.pressure[i] / (snapshot.density[i] * (gamma - 1.0));
            assert!((derived.specific_internal_energy[i] - expected).abs() < TOL);
        }
    }

    #[test]
    fn test_kinetic_energy_is_subtracted() {
        // d=2, v=(1,0,0), E=3 -> p = (3 - 1) * 0.4
        let p = pressure_from_total_energy(&[2.0], [&[1.0], &[0.0], &[0.0]], &[3.0], 1.4);
        assert!((p[0] - 0.8).abs() < TOL);
    }
}
