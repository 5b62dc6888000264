// src/controller/mod.rs
//! UI controller for the resume analysis and job search flows.
//!
//! Each flow owns its display regions, the last structured result it rendered
//! (reused by the PDF export) and a request token so that a slow response can
//! never overwrite the result of a request triggered after it.

pub mod agent;
pub mod flow;

pub use agent::{TerminalAgent, UserAgent};
pub use flow::{FlowPhase, RequestToken, RequestTokens};

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::error::{ClientError, NETWORK_ERROR};
use crate::types::{
    AnalyzeRequest, ApiOutcome, JobItem, JobSearchRequest, JobsOutcome, PdfOutcome, PdfRequest,
    ResumeOutcome, StructuredResume, JOBS_REPORT_TITLE, RESUME_REPORT_TITLE,
};
use crate::view::{render_job_cards, render_plain_text, render_resume_structured, Region};

pub const ANALYZING: &str = "Analyzing...";
pub const SEARCHING: &str = "Searching...";
pub const NO_DATA_RETURNED: &str = "No data returned.";
pub const NO_DATA: &str = "No data";
pub const NO_DETAILS: &str = "No details";
pub const NO_RECOMMENDATIONS: &str = "No recommendations";

/// The three backend operations the controller depends on.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    async fn analyze_resume(&self, request: &AnalyzeRequest) -> Result<ResumeOutcome>;
    async fn search_jobs(&self, request: &JobSearchRequest) -> Result<JobsOutcome>;
    async fn generate_pdf(&self, request: &PdfRequest) -> Result<PdfOutcome>;
}

/// Whether a finished request was written to its regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    Superseded,
}

#[derive(Debug, Clone)]
pub struct ResumeView {
    pub resume: String,
    pub job_description: String,
    pub summary: Region,
    pub details: Region,
    pub phase: FlowPhase,
    cached: Option<StructuredResume>,
    tokens: RequestTokens,
}

impl Default for ResumeView {
    fn default() -> Self {
        Self {
            resume: String::new(),
            job_description: String::new(),
            summary: Region::new("summaryBox"),
            details: Region::new("detailsBox"),
            phase: FlowPhase::Idle,
            cached: None,
            tokens: RequestTokens::default(),
        }
    }
}

impl ResumeView {
    pub fn cached(&self) -> Option<&StructuredResume> {
        self.cached.as_ref()
    }

    pub fn is_pending(&self) -> bool {
        self.tokens.is_pending()
    }

    fn pdf_request(&self) -> PdfRequest {
        match &self.cached {
            Some(structured) => PdfRequest::from_structured(structured.clone(), RESUME_REPORT_TITLE),
            None => PdfRequest::from_text(self.details.text_content(), NO_DETAILS, RESUME_REPORT_TITLE),
        }
    }

    fn apply(&mut self, result: Result<ResumeOutcome>) {
        match result {
            Err(e) => {
                warn!("Resume analysis request failed: {:#}", e);
                self.summary.set_text(NETWORK_ERROR);
                self.phase = FlowPhase::Failed;
            }
            Ok(ApiOutcome::Failed(message)) => {
                info!("Resume analysis returned an error: {}", message);
                self.summary.set_text(format!("Error: {}", message));
                self.phase = FlowPhase::Failed;
            }
            Ok(ApiOutcome::Structured(structured)) => {
                render_resume_structured(&structured, &mut self.summary, &mut self.details);
                self.cached = Some(structured);
                self.phase = FlowPhase::Rendered;
            }
            Ok(ApiOutcome::Raw(text)) => {
                render_plain_text(&text, &mut self.summary, &mut self.details);
                // raw text is written to the details region a second time
                self.details.set_text(text);
                self.phase = FlowPhase::Rendered;
            }
            Ok(ApiOutcome::Empty) => {
                self.summary.set_text(NO_DATA_RETURNED);
                self.phase = FlowPhase::Failed;
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct JobsView {
    pub qualifications: String,
    pub achievements: String,
    pub jobs: Region,
    pub phase: FlowPhase,
    cached: Option<Vec<JobItem>>,
    tokens: RequestTokens,
}

impl Default for JobsView {
    fn default() -> Self {
        Self {
            qualifications: String::new(),
            achievements: String::new(),
            jobs: Region::new("jobsBox"),
            phase: FlowPhase::Idle,
            cached: None,
            tokens: RequestTokens::default(),
        }
    }
}

impl JobsView {
    pub fn cached(&self) -> Option<&[JobItem]> {
        self.cached.as_deref()
    }

    pub fn is_pending(&self) -> bool {
        self.tokens.is_pending()
    }

    fn pdf_request(&self) -> PdfRequest {
        match &self.cached {
            Some(items) => PdfRequest::from_structured(items.clone(), JOBS_REPORT_TITLE),
            None => PdfRequest::from_text(self.jobs.text_content(), NO_RECOMMENDATIONS, JOBS_REPORT_TITLE),
        }
    }

    fn apply(&mut self, result: Result<JobsOutcome>) {
        match result {
            Err(e) => {
                warn!("Job search request failed: {:#}", e);
                self.jobs.set_text(NETWORK_ERROR);
                self.phase = FlowPhase::Failed;
            }
            Ok(ApiOutcome::Failed(message)) => {
                info!("Job search returned an error: {}", message);
                self.jobs.set_text(format!("Error: {}", message));
                self.phase = FlowPhase::Failed;
            }
            Ok(ApiOutcome::Structured(items)) => {
                render_job_cards(&items, &mut self.jobs);
                self.cached = Some(items);
                self.phase = FlowPhase::Rendered;
            }
            Ok(ApiOutcome::Raw(text)) => {
                self.jobs.set_text(text);
                self.phase = FlowPhase::Rendered;
            }
            Ok(ApiOutcome::Empty) => {
                self.jobs.set_text(NO_DATA);
                self.phase = FlowPhase::Failed;
            }
        }
    }
}

pub struct UiController {
    backend: Arc<dyn AnalysisBackend>,
    resume: Mutex<ResumeView>,
    jobs: Mutex<JobsView>,
}

impl UiController {
    pub fn new(backend: Arc<dyn AnalysisBackend>) -> Self {
        Self {
            backend,
            resume: Mutex::new(ResumeView::default()),
            jobs: Mutex::new(JobsView::default()),
        }
    }

    pub async fn resume_view(&self) -> ResumeView {
        self.resume.lock().await.clone()
    }

    pub async fn jobs_view(&self) -> JobsView {
        self.jobs.lock().await.clone()
    }

    /// Run the resume analysis flow for the given inputs.
    pub async fn analyze(&self, resume: String, job_description: String) -> Completion {
        let token = {
            let mut view = self.resume.lock().await;
            view.resume = resume.clone();
            view.job_description = job_description.clone();
            view.summary.set_text(ANALYZING);
            view.details.clear();
            view.phase = FlowPhase::Loading;
            view.tokens.issue()
        };

        let request = AnalyzeRequest {
            resume,
            job_description,
        };
        let result = self.backend.analyze_resume(&request).await;

        let mut view = self.resume.lock().await;
        if !view.tokens.complete(token) {
            debug!("Discarding superseded resume analysis response");
            return Completion::Superseded;
        }
        view.apply(result);
        Completion::Applied
    }

    /// Run the job search flow for the given inputs.
    pub async fn search_jobs(&self, qualifications: String, achievements: String) -> Completion {
        let token = {
            let mut view = self.jobs.lock().await;
            view.qualifications = qualifications.clone();
            view.achievements = achievements.clone();
            view.jobs.set_text(SEARCHING);
            view.phase = FlowPhase::Loading;
            view.tokens.issue()
        };

        let request = JobSearchRequest {
            qualifications,
            achievements,
        };
        let result = self.backend.search_jobs(&request).await;

        let mut view = self.jobs.lock().await;
        if !view.tokens.complete(token) {
            debug!("Discarding superseded job search response");
            return Completion::Superseded;
        }
        view.apply(result);
        Completion::Applied
    }

    /// Export the resume analysis as "Resume Analysis Report.pdf".
    pub async fn download_resume_pdf(&self, agent: &dyn UserAgent) -> Result<(), ClientError> {
        let request = self.resume.lock().await.pdf_request();
        self.export(request, agent).await
    }

    /// Export the job recommendations as "Job Recommendations.pdf".
    pub async fn download_jobs_pdf(&self, agent: &dyn UserAgent) -> Result<(), ClientError> {
        let request = self.jobs.lock().await.pdf_request();
        self.export(request, agent).await
    }

    async fn export(&self, request: PdfRequest, agent: &dyn UserAgent) -> Result<(), ClientError> {
        let outcome = match self.backend.generate_pdf(&request).await {
            Ok(outcome) => outcome,
            Err(e) => return Err(raise(agent, ClientError::Transport(e))),
        };

        match outcome {
            PdfOutcome::Document(document) => {
                let file_name = request.file_name();
                agent
                    .download(&file_name, document)
                    .await
                    .map_err(|e| raise(agent, ClientError::Download(e)))?;
                info!("Downloaded {}", file_name);
                Ok(())
            }
            PdfOutcome::Rejected(message) => Err(raise(agent, ClientError::PdfRejected(message))),
        }
    }
}

fn raise(agent: &dyn UserAgent, error: ClientError) -> ClientError {
    warn!("PDF export failed: {}", error);
    agent.alert(&error.alert_message());
    error
}
