//! Request-scoped temp files.
//!
//! A `TempArtifact` owns one uniquely named file in the scratch directory and
//! removes it when dropped. Handlers hold artifacts on the stack, so cleanup
//! runs on the success path, on every `?` early return, and on panic unwind
//! alike. Deletion failures are logged at warn and never surface to the
//! request.

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// A uniquely named file in the scratch directory, deleted on drop.
#[derive(Debug)]
pub struct TempArtifact {
    path: PathBuf,
}

impl TempArtifact {
    /// Reserve a unique path without creating the file. UUIDv4 naming makes
    /// collisions impossible in practice, so no locking is needed.
    pub fn allocate(scratch_dir: &Path, extension: &str) -> Self {
        let path = scratch_dir.join(format!("{}.{}", Uuid::new_v4(), extension));
        TempArtifact { path }
    }

    /// Allocate a path and persist `data` to it.
    pub async fn write(scratch_dir: &Path, extension: &str, data: &[u8]) -> io::Result<Self> {
        let artifact = Self::allocate(scratch_dir, extension);
        tokio::fs::write(&artifact.path, data).await?;
        Ok(artifact)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempArtifact {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            // NotFound is normal for allocated-but-never-written artifacts.
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Failed to remove temp artifact"
                );
            }
        }
    }
}
