use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a single apt index file (512 MiB).
///
/// An uncompressed `Sources` for main is around 50 MiB and `Packages` for
/// amd64 around 70 MiB; anything far beyond that is not an apt list.
pub const MAX_INDEX_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that an index file is a regular file of plausible size
/// and returns its size in bytes.
///
/// # Errors
/// Returns an error if:
/// - The path is not a regular file
/// - The file exceeds [`MAX_INDEX_FILE_SIZE`]
pub fn validate_index_file(path: &Path) -> Result<u64> {
    let metadata = fs::metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read metadata of {}: {}", path.display(), e))?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_INDEX_FILE_SIZE)?;
    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}
