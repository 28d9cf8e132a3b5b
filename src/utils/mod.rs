use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Ensures that the directory holding the given file path exists,
/// creating it if necessary.
pub fn ensure_directory_exists(file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
    }
    Ok(())
}
