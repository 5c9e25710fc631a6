use crate::render::RenderError;
use crate::snapshot::SnapshotError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a plotting run
#[derive(Debug, Error)]
pub enum PlotterError {
    /// Snapshot could not be read
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// Figure could not be drawn or written
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Output directory could not be created
    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Type alias for Results using PlotterError
pub type Result<T> = std::result::Result<T, PlotterError>;
