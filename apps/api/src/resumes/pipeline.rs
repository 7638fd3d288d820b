use tracing::{info, warn};

use crate::analysis::analyze_with_deadline;
use crate::errors::AppError;
use crate::extraction::{extract_resume_text, ExtractionError};
use crate::models::record::{AnalysisRecord, NewAnalysisRecord};
use crate::resumes::upload::UploadedFile;
use crate::state::AppState;

/// Extract → analyze → persist. Any failure aborts before the insert, and the
/// insert is the last step, so a record exists iff this returns `Ok`.
pub async fn analyze_and_store(
    state: &AppState,
    file: UploadedFile,
) -> Result<AnalysisRecord, AppError> {
    let UploadedFile { filename, bytes } = file;
    let file_size = bytes.len() as i64;
    info!(%filename, file_size, "Processing resume upload");

    let extracted_text = extract_resume_text(state.extractor.clone(), bytes)
        .await
        .map_err(|e| {
            if let ExtractionError::Unreadable(cause) = &e {
                warn!(%filename, "PDF extraction failed: {cause}");
            }
            AppError::InvalidInput("Could not extract text from PDF".to_string())
        })?;

    let analysis = analyze_with_deadline(
        state.analyzer.as_ref(),
        &extracted_text,
        state.config.analysis_timeout,
    )
    .await?;

    let record = state
        .store
        .insert(NewAnalysisRecord {
            filename,
            file_size,
            extracted_text,
            analysis_result: analysis,
        })
        .await?;

    Ok(record)
}
