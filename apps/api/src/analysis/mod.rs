//! Analysis Collaborator — turns résumé text into a structured `AnalysisResult`.
//!
//! `AppState` holds an `Arc<dyn ResumeAnalyzer>`. The production backend is
//! `LlmResumeAnalyzer`; every call goes through `analyze_with_deadline` so a
//! slow model surfaces as `AnalysisError::Timeout` instead of hanging the request.

use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::llm_client::{LlmClient, LlmError};
use crate::models::analysis::AnalysisResult;

pub mod prompts;

use prompts::{build_analysis_prompt, RESUME_ANALYSIS_SYSTEM};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("model call failed: {0}")]
    Model(LlmError),

    #[error("no JSON object found in model output")]
    NoJsonFound,

    #[error("model output is not a valid analysis: {0}")]
    Malformed(String),

    #[error("analysis exceeded {0:?}")]
    Timeout(Duration),
}

impl From<LlmError> for AnalysisError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::NoJson => AnalysisError::NoJsonFound,
            LlmError::Parse(e) => AnalysisError::Malformed(e.to_string()),
            other => AnalysisError::Model(other),
        }
    }
}

/// Implement this to swap the model backend without touching the upload path.
#[async_trait]
pub trait ResumeAnalyzer: Send + Sync {
    async fn analyze(&self, resume_text: &str) -> Result<AnalysisResult, AnalysisError>;
}

/// Analyzer backed by the shared `LlmClient`.
pub struct LlmResumeAnalyzer {
    llm: LlmClient,
}

impl LlmResumeAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeAnalyzer for LlmResumeAnalyzer {
    async fn analyze(&self, resume_text: &str) -> Result<AnalysisResult, AnalysisError> {
        let prompt = build_analysis_prompt(resume_text);
        let result: AnalysisResult = self
            .llm
            .call_json(&prompt, RESUME_ANALYSIS_SYSTEM)
            .await?;
        Ok(result.normalize())
    }
}

/// Runs `analyzer` with an upper bound on wall-clock time.
pub async fn analyze_with_deadline(
    analyzer: &dyn ResumeAnalyzer,
    resume_text: &str,
    deadline: Duration,
) -> Result<AnalysisResult, AnalysisError> {
    let result = match tokio::time::timeout(deadline, analyzer.analyze(resume_text)).await {
        Ok(Ok(result)) => result,
        Ok(Err(AnalysisError::Model(e))) if e.is_timeout() => {
            return Err(AnalysisError::Timeout(deadline))
        }
        Ok(Err(e)) => return Err(e),
        Err(_) => return Err(AnalysisError::Timeout(deadline)),
    };

    if !result.rating_in_range() {
        warn!("Model returned out-of-range rating {:?}", result.rating);
    }
    info!(
        experience = result.work_experience.len(),
        education = result.education.len(),
        projects = result.projects.len(),
        "Resume analysis complete"
    );

    Ok(result)
}
