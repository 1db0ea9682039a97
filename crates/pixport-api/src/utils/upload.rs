//! Common utilities for file upload handlers

use axum::extract::Multipart;
use pixport_core::AppError;

/// One file extracted from a multipart form.
#[derive(Debug)]
pub struct MultipartFile {
    pub data: Vec<u8>,
    pub original_filename: String,
    pub content_type: String,
}

/// Extract file data, filename, and content type from multipart form.
/// Only one field named "file" is accepted; multiple file fields are rejected.
/// Returns `None` when the form carries no file field at all, so the caller
/// decides how absence is reported.
pub async fn extract_multipart_file(
    mut multipart: Multipart,
) -> Result<Option<MultipartFile>, AppError> {
    let mut file: Option<MultipartFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::InvalidInput(format!("Failed to read multipart: {}", e)))?
    {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == "file" {
            if file.is_some() {
                return Err(AppError::InvalidInput(
                    "Multiple file fields are not allowed; send exactly one field named 'file'"
                        .to_string(),
                ));
            }
            let original_filename = field
                .file_name()
                .map(|s: &str| s.to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let content_type = field
                .content_type()
                .map(|s: &str| s.to_string())
                .unwrap_or_else(|| "application/octet-stream".to_string());

            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::InvalidInput(format!("Failed to read file data: {}", e)))?;

            file = Some(MultipartFile {
                data: data.to_vec(),
                original_filename,
                content_type,
            });
        }
    }

    Ok(file)
}
