//! Upload intake: validate, then persist.
//!
//! All checks run against the in-memory payload before anything touches the
//! scratch directory, so a rejected upload never creates a file that needs
//! cleaning up.

use std::path::Path;

use crate::temp::TempArtifact;

/// Fallback extension when the client filename yields nothing usable.
const DEFAULT_EXTENSION: &str = "img";

/// Validation failures for uploaded payloads.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File size exceeds maximum allowed size of {max_mb} MB")]
    FileTooLarge { size: usize, max_mb: usize },

    #[error("Only image files are allowed")]
    NotAnImage { content_type: String },

    #[error("File is empty")]
    EmptyFile,
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to persist upload: {0}")]
    Persist(#[from] std::io::Error),
}

/// Intake limits, derived from configuration.
#[derive(Debug, Clone, Copy)]
pub struct UploadPolicy {
    pub max_file_size: usize,
}

/// A validated, persisted upload. The temp file is removed when this drops.
#[derive(Debug)]
pub struct UploadedArtifact {
    pub original_filename: String,
    pub content_type: String,
    pub file_size: usize,
    artifact: TempArtifact,
}

impl UploadedArtifact {
    pub fn path(&self) -> &Path {
        self.artifact.path()
    }
}

/// Validate an upload and persist it under a unique name in the scratch dir.
pub async fn accept(
    policy: &UploadPolicy,
    scratch_dir: &Path,
    data: Vec<u8>,
    original_filename: String,
    content_type: String,
) -> Result<UploadedArtifact, IntakeError> {
    validate(policy, &data, &content_type)?;

    let extension = filename_extension(&original_filename);
    let artifact = TempArtifact::write(scratch_dir, extension, &data).await?;

    tracing::debug!(
        filename = %original_filename,
        content_type = %content_type,
        size = data.len(),
        path = %artifact.path().display(),
        "Accepted upload"
    );

    Ok(UploadedArtifact {
        original_filename,
        content_type,
        file_size: data.len(),
        artifact,
    })
}

fn validate(policy: &UploadPolicy, data: &[u8], content_type: &str) -> Result<(), ValidationError> {
    if data.is_empty() {
        return Err(ValidationError::EmptyFile);
    }

    let normalized = normalize_mime_type(content_type).to_lowercase();
    if !normalized.starts_with("image/") {
        return Err(ValidationError::NotAnImage {
            content_type: content_type.to_string(),
        });
    }

    if data.len() > policy.max_file_size {
        return Err(ValidationError::FileTooLarge {
            size: data.len(),
            max_mb: policy.max_file_size / 1024 / 1024,
        });
    }

    Ok(())
}

/// Normalize MIME type by stripping parameters (e.g. "image/jpeg; charset=utf-8" -> "image/jpeg").
fn normalize_mime_type(content_type: &str) -> &str {
    content_type
        .split(';')
        .next()
        .map(|s| s.trim())
        .unwrap_or(content_type)
}

/// Extension for the temp input file, taken from the client filename. Only
/// used for scratch naming; the decoder sniffs the real format from content.
fn filename_extension(filename: &str) -> &str {
    match Path::new(filename).extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) => {
            ext
        }
        _ => DEFAULT_EXTENSION,
    }
}
