//! Axum route handlers for the Resume API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::analysis::AnalysisResult;
use crate::models::record::{AnalysisRecord, AnalysisRecordSummary};
use crate::resumes::pipeline::analyze_and_store;
use crate::resumes::upload::read_resume_field;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub analysis: AnalysisResult,
    pub resume_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ResumeListResponse {
    pub resumes: Vec<AnalysisRecordSummary>,
}

#[derive(Debug, Serialize)]
pub struct ResumeDetailResponse {
    pub resume: AnalysisRecord,
}

/// POST /api/upload
///
/// Multipart form with a single `resume` PDF field.
pub async fn handle_upload(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, AppError> {
    // Not a multipart request at all: same outcome as a form without the file.
    let mut multipart =
        multipart.map_err(|_| AppError::InvalidInput("No file uploaded".to_string()))?;

    let file = read_resume_field(&mut multipart).await?;
    let record = analyze_and_store(&state, file).await?;

    Ok(Json(UploadResponse {
        success: true,
        analysis: record.analysis_result.0,
        resume_id: record.id,
    }))
}

/// GET /api/resumes
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<ResumeListResponse>, AppError> {
    let resumes = state.store.list().await?;
    Ok(Json(ResumeListResponse { resumes }))
}

/// GET /api/resumes/:id
///
/// Ids are UUIDs; anything that does not parse can never have been issued, so
/// it is a 404 like any other unknown id.
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ResumeDetailResponse>, AppError> {
    let not_found = || AppError::NotFound("Resume not found".to_string());

    let id = Uuid::parse_str(&id).map_err(|_| not_found())?;
    let resume = state.store.get(id).await?.ok_or_else(not_found)?;

    Ok(Json(ResumeDetailResponse { resume }))
}
