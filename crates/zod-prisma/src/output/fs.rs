//! Filesystem persistence.

use super::TypeScriptWriter;
use crate::traits::{UnitWriter, WriteError};
use crate::unit::Output;
use std::path::Path;

/// Writes each unit as a `.ts` file under the output directory, replacing
/// existing files.
#[derive(Debug, Default)]
pub struct FsWriter;

impl UnitWriter for FsWriter {
    fn write(&mut self, root: &Path, output: &Output) -> Result<(), WriteError> {
        std::fs::create_dir_all(root).map_err(|source| WriteError::CreateDir {
            path: root.to_path_buf(),
            source,
        })?;

        for unit in output.units() {
            let path = root.join(&unit.path);
            std::fs::write(&path, TypeScriptWriter::emit(unit))
                .map_err(|source| WriteError::Write { path: path.clone(), source })?;
            tracing::debug!(path = %path.display(), "wrote unit");
        }

        tracing::info!(root = %root.display(), "wrote output");
        Ok(())
    }
}
