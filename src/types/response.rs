// src/types/response.rs
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::types::analysis::{JobItem, StructuredResume};

/// Closed set of shapes an analysis endpoint can answer with.
///
/// Built once from the JSON body so rendering code matches on a tagged value
/// instead of probing for fields. Precedence follows the backend contract:
/// `error`, then `structured`, then `raw`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    Structured(T),
    Raw(String),
    Failed(String),
    Empty,
}

pub type ResumeOutcome = ApiOutcome<StructuredResume>;
pub type JobsOutcome = ApiOutcome<Vec<JobItem>>;

impl<T: DeserializeOwned> ApiOutcome<T> {
    pub fn from_value(body: Value) -> Self {
        let Value::Object(mut fields) = body else {
            return Self::Empty;
        };

        if let Some(message) = fields.remove("error").and_then(present_text) {
            return Self::Failed(message);
        }

        let raw = fields.remove("raw").and_then(present_text);

        if let Some(structured) = fields.remove("structured").filter(is_present) {
            match serde_json::from_value::<T>(structured) {
                Ok(payload) => return Self::Structured(payload),
                Err(e) => warn!("Ignoring structured payload that does not fit the schema: {}", e),
            }
        }

        match raw {
            Some(text) => Self::Raw(text),
            None => Self::Empty,
        }
    }
}

/// Outcome of a PDF generation request.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfOutcome {
    Document(Vec<u8>),
    /// Non-success status; carries the backend `error` or the status reason.
    Rejected(String),
}

/// Body of a failed PDF generation request.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct PdfErrorBody {
    #[serde(default)]
    pub error: Option<Value>,
}

impl PdfErrorBody {
    pub fn message(self) -> Option<String> {
        self.error.and_then(present_text)
    }
}

/// Empty strings, `false`, `0` and `null` count as absent.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().map_or(true, |n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn present_text(value: Value) -> Option<String> {
    if !is_present(&value) {
        return None;
    }
    match value {
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_wins_over_other_fields() {
        let outcome = ResumeOutcome::from_value(json!({
            "error": "Resume and Job Description are required.",
            "raw": "ignored"
        }));
        assert_eq!(
            outcome,
            ApiOutcome::Failed("Resume and Job Description are required.".to_string())
        );
    }

    #[test]
    fn test_structured_preferred_over_raw() {
        let outcome = ResumeOutcome::from_value(json!({
            "structured": {"match_score": 80, "summary": "Strong"},
            "raw": "{\"match_score\": 80}"
        }));
        match outcome {
            ApiOutcome::Structured(resume) => assert_eq!(resume.summary(), "Strong"),
            other => panic!("expected structured outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_schema_mismatch_falls_back_to_raw() {
        let outcome = JobsOutcome::from_value(json!({
            "structured": {"roles": []},
            "raw": "1. Backend Engineer"
        }));
        assert_eq!(outcome, ApiOutcome::Raw("1. Backend Engineer".to_string()));

        let without_raw = JobsOutcome::from_value(json!({"structured": "oops"}));
        assert_eq!(without_raw, ApiOutcome::Empty);
    }

    #[test]
    fn test_blank_fields_are_absent() {
        assert_eq!(
            ResumeOutcome::from_value(json!({"error": "", "raw": ""})),
            ApiOutcome::Empty
        );
        assert_eq!(ResumeOutcome::from_value(json!({})), ApiOutcome::Empty);
        assert_eq!(ResumeOutcome::from_value(json!(["not", "an", "object"])), ApiOutcome::Empty);
        assert_eq!(
            ResumeOutcome::from_value(json!({"error": {"code": 7}})),
            ApiOutcome::Failed("{\"code\":7}".to_string())
        );
    }

    #[test]
    fn test_empty_job_list_is_structured() {
        assert_eq!(
            JobsOutcome::from_value(json!({"structured": []})),
            ApiOutcome::Structured(Vec::new())
        );
    }

    #[test]
    fn test_pdf_error_body_message() {
        let body: PdfErrorBody = serde_json::from_value(json!({"error": "render failed"})).unwrap();
        assert_eq!(body.message().as_deref(), Some("render failed"));

        let blank: PdfErrorBody = serde_json::from_value(json!({})).unwrap();
        assert_eq!(blank.message(), None);
    }
}
