use crate::error::{Result, StoreError};
use std::fs;
use std::path::{Path, PathBuf};

/// Relative to the working directory unless configured otherwise.
pub const DATA_FILENAME: &str = "funcionarios.csv";

/// The command-line path wins over the configured one.
pub fn resolve_data_path(custom: Option<PathBuf>, configured: Option<PathBuf>) -> Result<PathBuf> {
    let path = custom
        .or(configured)
        .unwrap_or_else(|| PathBuf::from(DATA_FILENAME));
    if path.as_os_str().is_empty() {
        return Err(StoreError::InvalidDataPath(path));
    }
    Ok(path)
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
