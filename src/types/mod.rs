pub mod analysis;
pub mod response;

pub use analysis::{
    AnalyzeRequest, JobItem, JobSearchRequest, PdfRequest, PdfStructured, StructuredResume,
    JOBS_REPORT_TITLE, RESUME_REPORT_TITLE,
};
pub use response::{ApiOutcome, JobsOutcome, PdfErrorBody, PdfOutcome, ResumeOutcome};
