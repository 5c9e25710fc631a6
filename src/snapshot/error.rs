use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a snapshot file
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Snapshot file does not exist
    #[error("snapshot file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// HDF5 library error (unreadable file, bad datatype, ...)
    #[error("HDF5 error: {0}")]
    Hdf5(#[from] hdf5::Error),

    /// File-level attribute missing
    #[error("{}: missing attribute '{name}'", .path.display())]
    MissingAttribute { path: PathBuf, name: String },

    /// Attribute present but with the wrong shape
    #[error("{}: attribute '{name}' is invalid: {reason}", .path.display())]
    InvalidAttribute {
        path: PathBuf,
        name: String,
        reason: String,
    },

    /// Per-cell dataset missing
    #[error("{}: missing field '{name}'", .path.display())]
    MissingField { path: PathBuf, name: String },

    /// Per-cell dataset does not match the grid size
    #[error("{}: field '{name}' has {found} cells, expected {expected}", .path.display())]
    FieldLength {
        path: PathBuf,
        name: String,
        expected: usize,
        found: usize,
    },
}

/// Type alias for Results using SnapshotError
pub type Result<T> = std::result::Result<T, SnapshotError>;
