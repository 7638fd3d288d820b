use axum::extract::multipart::{Field, MultipartError};
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::{Bytes, BytesMut};

use crate::errors::AppError;

/// Name of the multipart field carrying the résumé.
pub const RESUME_FIELD: &str = "resume";
pub const PDF_MIME: &str = "application/pdf";
/// 10 MiB.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_FILENAME: &str = "resume.pdf";

#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub bytes: Bytes,
}

/// Pulls the `resume` field out of the form. MIME type and size are checked
/// while streaming, so an oversize or non-PDF upload is rejected before any
/// extraction happens and is never fully buffered.
pub async fn read_resume_field(multipart: &mut Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }

        if !is_pdf(field.content_type()) {
            return Err(AppError::InvalidInput(
                "Only PDF files are allowed".to_string(),
            ));
        }

        let filename = field
            .file_name()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(DEFAULT_FILENAME)
            .to_string();
        let bytes = read_limited(field, MAX_UPLOAD_BYTES).await?;

        return Ok(UploadedFile { filename, bytes });
    }

    Err(AppError::InvalidInput("No file uploaded".to_string()))
}

async fn read_limited(mut field: Field<'_>, limit: usize) -> Result<Bytes, AppError> {
    let mut buf = BytesMut::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        if buf.len() + chunk.len() > limit {
            return Err(too_large());
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf.freeze())
}

fn is_pdf(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .map(|mime| mime.trim().eq_ignore_ascii_case(PDF_MIME))
        .unwrap_or(false)
}

fn too_large() -> AppError {
    AppError::InvalidInput(format!(
        "File too large, the limit is {} MiB",
        MAX_UPLOAD_BYTES / (1024 * 1024)
    ))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        too_large()
    } else {
        AppError::InvalidInput(format!("Invalid upload: {}", err.body_text()))
    }
}
