use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("PDF could not be parsed: {0}")]
    Unreadable(String),

    #[error("PDF contains no extractable text")]
    Empty,
}

/// PDF Collaborator: bytes in, plain text out. Called from the blocking pool.
pub trait TextExtractor: Send + Sync {
    fn extract(&self, pdf: &[u8]) -> Result<String, ExtractionError>;
}

/// Backed by the `pdf-extract` crate.
pub struct PdfTextExtractor;

impl TextExtractor for PdfTextExtractor {
    fn extract(&self, pdf: &[u8]) -> Result<String, ExtractionError> {
        pdf_extract::extract_text_from_mem(pdf)
            .map_err(|e| ExtractionError::Unreadable(e.to_string()))
    }
}

/// Extracts text off the async runtime and rejects whitespace-only output.
/// A panic inside the PDF library is reported as an unreadable file.
/// NUL characters are dropped: Postgres `TEXT` and `JSONB` reject them.
pub async fn extract_resume_text(
    extractor: Arc<dyn TextExtractor>,
    pdf: Bytes,
) -> Result<String, ExtractionError> {
    let mut text = tokio::task::spawn_blocking(move || extractor.extract(&pdf))
        .await
        .map_err(|e| ExtractionError::Unreadable(format!("extractor aborted: {e}")))??;

    if text.contains('\0') {
        text.retain(|c| c != '\0');
    }

    if text.trim().is_empty() {
        return Err(ExtractionError::Empty);
    }

    debug!(chars = text.len(), "Extracted resume text");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedText(&'static str);

    impl TextExtractor for FixedText {
        fn extract(&self, _pdf: &[u8]) -> Result<String, ExtractionError> {
            Ok(self.0.to_string())
        }
    }

    struct Panicking;

    impl TextExtractor for Panicking {
        fn extract(&self, _pdf: &[u8]) -> Result<String, ExtractionError> {
            panic!("malformed xref table")
        }
    }

    #[tokio::test]
    async fn test_text_is_returned_verbatim() {
        let text = extract_resume_text(Arc::new(FixedText("  Jane Doe\n")), Bytes::new())
            .await
            .unwrap();
        assert_eq!(text, "  Jane Doe\n");
    }

    #[tokio::test]
    async fn test_whitespace_only_text_is_empty() {
        let err = extract_resume_text(Arc::new(FixedText(" \n\t ")), Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Empty));
    }

    #[tokio::test]
    async fn test_nul_characters_are_stripped() {
        let text = extract_resume_text(Arc::new(FixedText("Jane\0 Doe\0\n")), Bytes::new())
            .await
            .unwrap();
        assert_eq!(text, "Jane Doe\n");
    }

    #[tokio::test]
    async fn test_nul_only_text_is_empty() {
        let err = extract_resume_text(Arc::new(FixedText("\0\0 \0")), Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Empty));
    }

    #[tokio::test]
    async fn test_panic_becomes_unreadable() {
        let err = extract_resume_text(Arc::new(Panicking), Bytes::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Unreadable(_)));
    }

    #[tokio::test]
    async fn test_garbage_bytes_are_unreadable() {
        let garbage = Bytes::from_static(b"definitely not a pdf");
        let result = extract_resume_text(Arc::new(PdfTextExtractor), garbage).await;
        assert!(result.is_err());
    }
}
