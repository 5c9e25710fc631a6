//! Snapshot files: reading, writing and derived quantities
//!
//! Structure:
//! - `loader.rs`: HDF5 reading and the `Snapshot` type
//! - `derive.rs`: velocity, pressure and internal energy
//! - `writer.rs`: HDF5 writing and the Sod initial state
//! - `error.rs`: Error types

pub mod derive;
pub mod error;
pub mod loader;
pub mod writer;

pub use derive::DerivedFields;
pub use error::{Result, SnapshotError};
pub use loader::{DualEnergy, GridDims, Snapshot};
pub use writer::sod_shock_tube;
