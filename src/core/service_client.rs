// src/core/service_client.rs
//! HTTP client for the analysis backend - JSON in, JSON or PDF bytes out

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::controller::AnalysisBackend;
use crate::types::{
    AnalyzeRequest, ApiOutcome, JobSearchRequest, JobsOutcome, PdfErrorBody, PdfOutcome,
    PdfRequest, ResumeOutcome,
};

const ANALYZE_RESUME_ENDPOINT: &str = "/api/analyze_resume";
const SEARCH_JOBS_ENDPOINT: &str = "/api/search_jobs";
const GENERATE_PDF_ENDPOINT: &str = "/api/generate_pdf";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST `payload` as JSON and return the parsed body whatever the status.
    ///
    /// Callers interpret an `error` field themselves; only transport and
    /// JSON decoding failures surface as `Err`.
    pub async fn post_json<T>(&self, endpoint: &str, payload: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        debug!("Response status from {}: {}", url, response.status());

        response
            .json::<Value>()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    pub async fn analyze_resume(&self, request: &AnalyzeRequest) -> Result<ResumeOutcome> {
        info!("Calling resume analysis: {}{}", self.base_url, ANALYZE_RESUME_ENDPOINT);
        let body = self.post_json(ANALYZE_RESUME_ENDPOINT, request).await?;
        Ok(ApiOutcome::from_value(body))
    }

    pub async fn search_jobs(&self, request: &JobSearchRequest) -> Result<JobsOutcome> {
        info!("Calling job search: {}{}", self.base_url, SEARCH_JOBS_ENDPOINT);
        let body = self.post_json(SEARCH_JOBS_ENDPOINT, request).await?;
        Ok(ApiOutcome::from_value(body))
    }

    /// Request a PDF report. A non-success status is not an `Err`: it becomes
    /// [`PdfOutcome::Rejected`] with the backend message or the status reason.
    pub async fn generate_pdf(&self, request: &PdfRequest) -> Result<PdfOutcome> {
        let url = format!("{}{}", self.base_url, GENERATE_PDF_ENDPOINT);
        info!("Requesting PDF '{}' from {}", request.title, url);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .with_context(|| format!("Failed to POST to {}", url))?;

        let status = response.status();
        if status.is_success() {
            let bytes = response
                .bytes()
                .await
                .context("Failed to read PDF document")?;
            info!("Received PDF '{}' ({} bytes)", request.title, bytes.len());
            return Ok(PdfOutcome::Document(bytes.to_vec()));
        }

        let reason = status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| status.as_str().to_string());

        let message = match response.json::<PdfErrorBody>().await {
            Ok(body) => body.message().unwrap_or(reason),
            Err(e) => {
                warn!("PDF error response from {} is not JSON: {}", url, e);
                reason
            }
        };

        warn!("PDF generation failed with status {}: {}", status, message);
        Ok(PdfOutcome::Rejected(message))
    }
}

#[async_trait]
impl AnalysisBackend for ServiceClient {
    async fn analyze_resume(&self, request: &AnalyzeRequest) -> Result<ResumeOutcome> {
        ServiceClient::analyze_resume(self, request).await
    }

    async fn search_jobs(&self, request: &JobSearchRequest) -> Result<JobsOutcome> {
        ServiceClient::search_jobs(self, request).await
    }

    async fn generate_pdf(&self, request: &PdfRequest) -> Result<PdfOutcome> {
        ServiceClient::generate_pdf(self, request).await
    }
}
