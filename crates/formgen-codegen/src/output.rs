//! Writing generated files to disk.

use std::path::{Path, PathBuf};

use crate::error::{CodegenError, Result};
use crate::generators::GeneratedFiles;
use crate::options::GeneratorOptions;

/// Destination paths of the generated pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub header: PathBuf,
    pub source: PathBuf,
}

impl OutputPaths {
    /// Both files inside `dir`, named after the options' file stem.
    pub fn in_dir(dir: impl AsRef<Path>, options: &GeneratorOptions) -> Self {
        let dir = dir.as_ref();
        Self {
            header: dir.join(options.header_file_name()),
            source: dir.join(options.source_file_name()),
        }
    }
}

/// Write both files, replacing whatever is there. Missing parent
/// directories are created.
pub fn write_outputs(files: &GeneratedFiles, paths: &OutputPaths) -> Result<()> {
    write_file(&paths.source, &files.source)?;
    write_file(&paths.header, &files.header)?;
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| CodegenError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    std::fs::write(path, content).map_err(|source| CodegenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote generated file");
    Ok(())
}
