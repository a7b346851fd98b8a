//! Traits for persisting generated output.

use crate::unit::Output;
use std::path::{Path, PathBuf};

/// Error that can occur when persisting output units.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persists a complete output set.
///
/// Called once per run with every unit; generation never observes partial
/// writes.
pub trait UnitWriter {
    /// Persist `output` under the directory `root`.
    fn write(&mut self, root: &Path, output: &Output) -> Result<(), WriteError>;
}
