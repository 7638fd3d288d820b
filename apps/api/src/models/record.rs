use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::analysis::AnalysisResult;

/// One row of `resume_analyses`. Rows are insert-only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub filename: String,
    pub file_size: i64,
    pub extracted_text: String,
    pub analysis_result: Json<AnalysisResult>,
    pub created_at: DateTime<Utc>,
}

/// List view of a record; `extracted_text` is left out to keep payloads small.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisRecordSummary {
    pub id: Uuid,
    pub filename: String,
    pub file_size: i64,
    pub analysis_result: Json<AnalysisResult>,
    pub created_at: DateTime<Utc>,
}

/// Everything the upload pipeline knows before the store assigns an id.
#[derive(Debug, Clone)]
pub struct NewAnalysisRecord {
    pub filename: String,
    pub file_size: i64,
    pub extracted_text: String,
    pub analysis_result: AnalysisResult,
}

impl From<&AnalysisRecord> for AnalysisRecordSummary {
    fn from(record: &AnalysisRecord) -> Self {
        Self {
            id: record.id,
            filename: record.filename.clone(),
            file_size: record.file_size,
            analysis_result: record.analysis_result.clone(),
            created_at: record.created_at,
        }
    }
}
