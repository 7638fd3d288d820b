//! Persistence Collaborator — insert-only store for `AnalysisRecord`s.
//!
//! Carried in `AppState` as `Arc<dyn AnalysisStore>`.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::record::{AnalysisRecord, AnalysisRecordSummary, NewAnalysisRecord};

#[async_trait]
pub trait AnalysisStore: Send + Sync {
    /// Assigns a fresh id and `created_at`, stores the record, and returns it.
    async fn insert(&self, record: NewAnalysisRecord) -> Result<AnalysisRecord, sqlx::Error>;

    /// All records, newest first.
    async fn list(&self) -> Result<Vec<AnalysisRecordSummary>, sqlx::Error>;

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, sqlx::Error>;
}

pub struct PgAnalysisStore {
    pool: PgPool,
}

impl PgAnalysisStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnalysisStore for PgAnalysisStore {
    async fn insert(&self, record: NewAnalysisRecord) -> Result<AnalysisRecord, sqlx::Error> {
        let NewAnalysisRecord {
            filename,
            file_size,
            extracted_text,
            analysis_result,
        } = record;

        let row = sqlx::query_as::<_, AnalysisRecord>(
            r#"
            INSERT INTO resume_analyses
                (id, filename, file_size, extracted_text, analysis_result, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, filename, file_size, extracted_text, analysis_result, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(filename)
        .bind(file_size)
        .bind(extracted_text)
        .bind(Json(analysis_result))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        info!("Inserted resume analysis {} ({})", row.id, row.filename);
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<AnalysisRecordSummary>, sqlx::Error> {
        sqlx::query_as::<_, AnalysisRecordSummary>(
            r#"
            SELECT id, filename, file_size, analysis_result, created_at
            FROM resume_analyses
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn get(&self, id: Uuid) -> Result<Option<AnalysisRecord>, sqlx::Error> {
        sqlx::query_as::<_, AnalysisRecord>(
            r#"
            SELECT id, filename, file_size, extracted_text, analysis_result, created_at
            FROM resume_analyses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }
}
