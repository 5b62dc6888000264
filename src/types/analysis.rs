// src/types/analysis.rs
//! Request bodies and structured payloads exchanged with the analysis backend

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

pub const RESUME_REPORT_TITLE: &str = "Resume Analysis Report";
pub const JOBS_REPORT_TITLE: &str = "Job Recommendations";

const DEFAULT_ROLE_TITLE: &str = "Role";

// ===== Request bodies =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub resume: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSearchRequest {
    pub qualifications: String,
    pub achievements: String,
}

// ===== Structured payloads =====

/// Scored comparison of a resume against a job description.
///
/// Optional fields stay `None` when the backend omits them so that the payload
/// serializes back to the shape it arrived in. Unknown keys are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredResume {
    pub match_score: Number,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvements: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StructuredResume {
    pub fn summary(&self) -> &str {
        self.summary.as_deref().unwrap_or_default()
    }

    pub fn missing_skills(&self) -> &[String] {
        self.missing_skills.as_deref().unwrap_or_default()
    }

    pub fn improvements(&self) -> &[String] {
        self.improvements.as_deref().unwrap_or_default()
    }

    /// Score as a percentage label: `72%`, `72.5%`. A float with no
    /// fractional part prints without it, so `72.0` is shown as `72%`.
    pub fn score_label(&self) -> String {
        match self.match_score.as_f64() {
            Some(score) if self.match_score.is_f64() => format!("{}%", score),
            _ => format!("{}%", self.match_score),
        }
    }

    /// Fill width of the score bar in percent, clamped to `0..=100`.
    pub fn bar_width(&self) -> f64 {
        let score = self.match_score.as_f64().unwrap_or(0.0);
        if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 100.0)
        }
    }
}

/// One recommended role from a job search.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvements: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobItem {
    /// First non-empty of `role`, `title`, then the literal "Role".
    pub fn display_title(&self) -> &str {
        [self.role.as_deref(), self.title.as_deref()]
            .into_iter()
            .flatten()
            .find(|candidate| !candidate.is_empty())
            .unwrap_or(DEFAULT_ROLE_TITLE)
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    pub fn improvements(&self) -> &[String] {
        self.improvements.as_deref().unwrap_or_default()
    }
}

// ===== PDF generation =====

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PdfStructured {
    Resume(StructuredResume),
    Jobs(Vec<JobItem>),
}

impl From<StructuredResume> for PdfStructured {
    fn from(resume: StructuredResume) -> Self {
        Self::Resume(resume)
    }
}

impl From<Vec<JobItem>> for PdfStructured {
    fn from(items: Vec<JobItem>) -> Self {
        Self::Jobs(items)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structured: Option<PdfStructured>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    pub title: String,
}

impl PdfRequest {
    pub fn from_structured(structured: impl Into<PdfStructured>, title: &str) -> Self {
        Self {
            structured: Some(structured.into()),
            text: None,
            title: title.to_string(),
        }
    }

    /// Text report; an empty `text` is replaced by `fallback`.
    pub fn from_text(text: String, fallback: &str, title: &str) -> Self {
        let text = if text.is_empty() {
            fallback.to_string()
        } else {
            text
        };

        Self {
            structured: None,
            text: Some(text),
            title: title.to_string(),
        }
    }

    /// Name the downloaded document is saved under.
    pub fn file_name(&self) -> String {
        format!("{}.pdf", self.title)
    }
}
