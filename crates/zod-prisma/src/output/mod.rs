//! Rendering and persistence of generated units.
//!
//! [`TypeScriptWriter`] turns an [`OutputUnit`](crate::unit::OutputUnit) into
//! source text. The [`UnitWriter`](crate::traits::UnitWriter) implementations
//! here decide where that text goes.

pub mod fs;
pub mod typescript;

pub use fs::FsWriter;
pub use typescript::TypeScriptWriter;

use crate::traits::{UnitWriter, WriteError};
use crate::unit::Output;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Keeps rendered units in memory, keyed by full path.
#[derive(Debug, Default)]
pub struct MemoryWriter {
    pub files: BTreeMap<PathBuf, String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl UnitWriter for MemoryWriter {
    fn write(&mut self, root: &Path, output: &Output) -> Result<(), WriteError> {
        for unit in output.units() {
            self.files
                .insert(root.join(&unit.path), TypeScriptWriter::emit(unit));
        }
        Ok(())
    }
}
