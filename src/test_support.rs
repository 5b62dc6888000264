//! Scripted collaborators shared by the unit tests.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use crate::controller::{AnalysisBackend, UserAgent};
use crate::types::{
    AnalyzeRequest, ApiOutcome, JobSearchRequest, JobsOutcome, PdfOutcome, PdfRequest,
    ResumeOutcome,
};

/// Queued reply: `None` body means a transport failure.
struct Reply {
    body: Option<Value>,
    delay: Duration,
}

#[derive(Default)]
pub struct ScriptedBackend {
    analyze_replies: Mutex<VecDeque<Reply>>,
    jobs_replies: Mutex<VecDeque<Reply>>,
    pdf: Mutex<Option<PdfOutcome>>,
    analyze_requests: Mutex<Vec<AnalyzeRequest>>,
    jobs_requests: Mutex<Vec<JobSearchRequest>>,
    pdf_requests: Mutex<Vec<PdfRequest>>,
}

impl ScriptedBackend {
    pub fn push_analyze(&self, body: Value) {
        self.push_analyze_delayed(body, Duration::ZERO);
    }

    pub fn push_analyze_delayed(&self, body: Value, delay: Duration) {
        self.analyze_replies.lock().unwrap().push_back(Reply {
            body: Some(body),
            delay,
        });
    }

    pub fn push_analyze_failure(&self) {
        self.analyze_replies.lock().unwrap().push_back(Reply {
            body: None,
            delay: Duration::ZERO,
        });
    }

    pub fn push_jobs(&self, body: Value) {
        self.push_jobs_delayed(body, Duration::ZERO);
    }

    pub fn push_jobs_delayed(&self, body: Value, delay: Duration) {
        self.jobs_replies.lock().unwrap().push_back(Reply {
            body: Some(body),
            delay,
        });
    }

    pub fn push_jobs_failure(&self) {
        self.jobs_replies.lock().unwrap().push_back(Reply {
            body: None,
            delay: Duration::ZERO,
        });
    }

    pub fn set_pdf(&self, outcome: PdfOutcome) {
        *self.pdf.lock().unwrap() = Some(outcome);
    }

    pub fn analyze_requests(&self) -> Vec<AnalyzeRequest> {
        self.analyze_requests.lock().unwrap().clone()
    }

    pub fn jobs_requests(&self) -> Vec<JobSearchRequest> {
        self.jobs_requests.lock().unwrap().clone()
    }

    pub fn pdf_requests(&self) -> Vec<PdfRequest> {
        self.pdf_requests.lock().unwrap().clone()
    }

    async fn reply(queue: &Mutex<VecDeque<Reply>>) -> Result<Value> {
        let reply = queue.lock().unwrap().pop_front();
        let reply = reply.ok_or_else(|| anyhow!("no scripted reply left"))?;
        if !reply.delay.is_zero() {
            tokio::time::sleep(reply.delay).await;
        }
        reply.body.ok_or_else(|| anyhow!("connection refused"))
    }
}

#[async_trait]
impl AnalysisBackend for ScriptedBackend {
    async fn analyze_resume(&self, request: &AnalyzeRequest) -> Result<ResumeOutcome> {
        self.analyze_requests.lock().unwrap().push(request.clone());
        let body = Self::reply(&self.analyze_replies).await?;
        Ok(ApiOutcome::from_value(body))
    }

    async fn search_jobs(&self, request: &JobSearchRequest) -> Result<JobsOutcome> {
        self.jobs_requests.lock().unwrap().push(request.clone());
        let body = Self::reply(&self.jobs_replies).await?;
        Ok(ApiOutcome::from_value(body))
    }

    async fn generate_pdf(&self, request: &PdfRequest) -> Result<PdfOutcome> {
        self.pdf_requests.lock().unwrap().push(request.clone());
        let outcome = self.pdf.lock().unwrap().clone();
        outcome.ok_or_else(|| anyhow!("connection refused"))
    }
}

#[derive(Default)]
pub struct RecordingAgent {
    downloads: Mutex<Vec<(String, Vec<u8>)>>,
    alerts: Mutex<Vec<String>>,
}

impl RecordingAgent {
    pub fn downloads(&self) -> Vec<(String, Vec<u8>)> {
        self.downloads.lock().unwrap().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserAgent for RecordingAgent {
    async fn download(&self, file_name: &str, document: Vec<u8>) -> Result<()> {
        self.downloads
            .lock()
            .unwrap()
            .push((file_name.to_string(), document));
        Ok(())
    }

    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }
}
