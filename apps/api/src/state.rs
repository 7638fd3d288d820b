use std::sync::Arc;

use crate::analysis::ResumeAnalyzer;
use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::store::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Collaborators sit behind trait objects so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AnalysisStore>,
    pub analyzer: Arc<dyn ResumeAnalyzer>,
    pub extractor: Arc<dyn TextExtractor>,
    pub config: Config,
}
