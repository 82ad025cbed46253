use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Upper bound for configuration and repository files (10 MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Checks that `path` is a regular file, not a symlink or directory, and no
/// larger than `max_size` bytes.
///
/// `symlink_metadata()` is used so that the link itself is inspected rather
/// than whatever it points to.
pub fn validate_regular_file(path: &Path, description: &str, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| AnalyzerError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", description, e),
    })?;

    if metadata.is_symlink() {
        return Err(AnalyzerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", description),
            hint: "Point to the real file instead of a symbolic link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        return Err(AnalyzerError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "{} is too large ({} bytes, maximum {} bytes)",
                description,
                metadata.len(),
                max_size
            ),
            hint: "Split the file or remove unused entries".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Reads a text file after [`validate_regular_file`] accepted it.
pub fn read_regular_file(path: &Path, description: &str) -> Result<String> {
    validate_regular_file(path, description, MAX_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        AnalyzerError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
