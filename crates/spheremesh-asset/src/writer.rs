//! The single asset-file write at the end of a generation run.

use std::path::Path;

use crate::format::serialize_scalars;

/// Errors that can occur when writing the mesh asset file.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    /// Failed to write the asset file to disk.
    #[error("failed to write mesh asset: {0}")]
    WriteError(#[source] std::io::Error),
}

/// Serialize the scalar sequence and write it to `path` in one pass.
///
/// The destination directory must already exist; a missing or unwritable
/// destination is surfaced directly with its io cause. There is no retry,
/// no partial-output recovery, and no fallback path.
pub fn write_mesh_asset(path: &Path, scalars: &[f64]) -> Result<(), AssetError> {
    let contents = serialize_scalars(scalars);
    std::fs::write(path, contents).map_err(AssetError::WriteError)?;
    Ok(())
}
