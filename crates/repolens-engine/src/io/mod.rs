use crate::models::ProjectFile;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Invalid output directory: {0}")]
    InvalidOutputDir(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the generated files below `out_dir`, creating parent
/// directories as needed. Files with unsafe names are skipped with a
/// warning rather than aborting the export. Returns the written paths.
pub fn export_files(files: &[ProjectFile], out_dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if out_dir.exists() && !out_dir.is_dir() {
        return Err(IoError::InvalidOutputDir(out_dir.to_path_buf()));
    }
    fs::create_dir_all(out_dir)?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let Some(relative) = file.relative_path() else {
            log::warn!("skipping generated file with unsafe name: {}", file.filename);
            continue;
        };
        let absolute = relative.to_path(out_dir);
        if let Some(parent) = absolute.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&absolute, &file.content)?;
        written.push(absolute);
    }
    Ok(written)
}
