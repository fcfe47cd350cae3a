use crate::export::{ExportedPage, MARKUP_FILE, STYLESHEET_FILE};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Export path is not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Write the exported markup and stylesheet into `dir`.
///
/// Creates `dir` and its parents if needed and overwrites earlier exports.
/// Returns the written paths, markup first.
pub fn write_export(dir: &Path, page: &ExportedPage) -> Result<[PathBuf; 2], IoError> {
    if dir.exists() && !dir.is_dir() {
        return Err(IoError::NotADirectory(dir.to_path_buf()));
    }
    fs::create_dir_all(dir)?;

    let markup_path = dir.join(MARKUP_FILE);
    let stylesheet_path = dir.join(STYLESHEET_FILE);
    fs::write(&markup_path, &page.markup)?;
    fs::write(&stylesheet_path, &page.stylesheet)?;

    log::info!("wrote export to {}", dir.display());
    Ok([markup_path, stylesheet_path])
}
