// src/view/pages.rs
//! Full HTML pages for the web front end

use crate::controller::{FlowPhase, JobsView, ResumeView};
use crate::view::node::html_escape;

/// Render the landing page.
pub fn render_index() -> String {
    let content = r#"<div class="container">
    <h2>Career tools</h2>
    <div class="tool-card"><h3><a href="/resume-analyzer">Resume Analyzer</a></h3><p>Compare a resume with a job description, get a match score, missing skills and improvements.</p></div>
    <div class="tool-card"><h3><a href="/job-search">Job Search</a></h3><p>Describe your qualifications and achievements to get suitable roles with tailored resume tips.</p></div>
</div>"#;

    build_page("Home", content, None)
}

/// Render the resume analyzer with the regions of `view`.
pub fn render_resume_page(view: &ResumeView, alert: Option<&str>) -> String {
    let content = format!(
        r#"<div class="container">
    <h2>Resume Analyzer</h2>
    <form method="post" action="/resume-analyzer/analyze">
        <label for="resume">Resume</label>
        <textarea id="resume" name="resume" rows="12">{resume}</textarea>
        <label for="job_desc">Job description</label>
        <textarea id="job_desc" name="job_desc" rows="8">{job_desc}</textarea>
        <button id="analyzeBtn" type="submit"{busy}>Analyze</button>
    </form>
    <div class="results" data-phase="{phase}">
        {summary}
        {details}
    </div>
    <form method="post" action="/resume-analyzer/pdf">
        <button id="downloadPdfBtn" type="submit">Download PDF</button>
    </form>
</div>"#,
        resume = html_escape(&view.resume),
        job_desc = html_escape(&view.job_description),
        busy = disabled_when(view.is_pending()),
        phase = phase_name(view.phase),
        summary = view.summary.to_html(),
        details = view.details.to_html(),
    );

    build_page("Resume Analyzer", &content, alert)
}

/// Render the job search page with the regions of `view`.
pub fn render_jobs_page(view: &JobsView, alert: Option<&str>) -> String {
    let content = format!(
        r#"<div class="container">
    <h2>Job Search</h2>
    <form method="post" action="/job-search/search">
        <label for="qualifications">Qualifications</label>
        <textarea id="qualifications" name="qualifications" rows="8">{qualifications}</textarea>
        <label for="achievements">Achievements</label>
        <textarea id="achievements" name="achievements" rows="6">{achievements}</textarea>
        <button id="searchBtn" type="submit"{busy}>Search</button>
    </form>
    <div class="results" data-phase="{phase}">
        {jobs}
    </div>
    <form method="post" action="/job-search/pdf">
        <button id="downloadJobsPdfBtn" type="submit">Download PDF</button>
    </form>
</div>"#,
        qualifications = html_escape(&view.qualifications),
        achievements = html_escape(&view.achievements),
        busy = disabled_when(view.is_pending()),
        phase = phase_name(view.phase),
        jobs = view.jobs.to_html(),
    );

    build_page("Job Search", &content, alert)
}

/// Render a bare message page for error catchers.
pub fn render_message(title: &str, message: &str) -> String {
    let content = format!(
        r#"<div class="container"><h2>{}</h2><p>{}</p><p><a href="/">Back to home</a></p></div>"#,
        html_escape(title),
        html_escape(message)
    );
    build_page(title, &content, None)
}

fn disabled_when(pending: bool) -> &'static str {
    if pending {
        " disabled"
    } else {
        ""
    }
}

fn phase_name(phase: FlowPhase) -> &'static str {
    match phase {
        FlowPhase::Idle => "idle",
        FlowPhase::Loading => "loading",
        FlowPhase::Rendered => "rendered",
        FlowPhase::Failed => "error",
    }
}

fn alert_dialog(message: &str) -> String {
    format!(
        r#"<dialog id="alertDialog" open role="alertdialog"><p>{}</p><form method="dialog"><button type="submit">OK</button></form></dialog>"#,
        html_escape(message)
    )
}

fn build_page(title: &str, content: &str, alert: Option<&str>) -> String {
    let alert = alert.map(alert_dialog).unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} · cvlens</title>
<style>
*{{margin:0;padding:0;box-sizing:border-box;}}
body{{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;color:#e8e8f0;background:#0a0a0f;}}
.header{{background:#12121a;padding:12px 24px;display:flex;align-items:center;justify-content:space-between;border-bottom:1px solid #00f0ff33;}}
.header h1{{font-size:18px;font-weight:600;color:#00f0ff;}}
.header nav a{{color:#aaa;text-decoration:none;margin-left:20px;font-size:14px;}}
.container{{max-width:960px;margin:0 auto;padding:24px;}}
h2{{margin-bottom:16px;}}
label{{display:block;margin:12px 0 4px;font-size:13px;color:#aaa;}}
textarea{{width:100%;background:#12121a;color:#e8e8f0;border:1px solid #333;border-radius:6px;padding:8px;}}
button{{margin-top:12px;padding:8px 18px;border:none;border-radius:6px;background:#00f0ff;color:#0a0a0f;font-weight:600;cursor:pointer;}}
button[disabled]{{opacity:.5;cursor:wait;}}
.results{{margin-top:20px;}}
#summaryBox,#detailsBox,#jobsBox{{background:#12121a;border-radius:8px;padding:16px;margin-bottom:12px;white-space:pre-wrap;}}
.score-bar{{height:12px;background:#222;border-radius:6px;overflow:hidden;margin:6px 0;}}
.score-fill{{height:100%;background:#39ff14;}}
.score-num{{font-size:20px;font-weight:700;}}
.summary{{margin-top:10px;}}
.missing h4{{color:#ff073a;}}
.improvements h4{{color:#39ff14;}}
li{{margin-left:20px;}}
.job-card{{border:1px solid #333;border-radius:8px;padding:12px;margin-bottom:10px;}}
.job-title{{font-weight:700;color:#00f0ff;}}
.job-desc{{color:#bbb;margin:4px 0;}}
.tool-card{{border:1px solid #333;border-radius:8px;padding:16px;margin-bottom:12px;}}
.tool-card a{{color:#00f0ff;}}
dialog{{margin:auto;padding:20px;border-radius:8px;border:1px solid #ff073a;background:#12121a;color:#e8e8f0;}}
</style>
</head>
<body>
<div class="header"><h1>cvlens</h1><nav><a href="/">Home</a><a href="/resume-analyzer">Resume Analyzer</a><a href="/job-search">Job Search</a></nav></div>
{content}
{alert}
</body>
</html>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::UiController;
    use crate::test_support::ScriptedBackend;
    use scraper::{Html, Selector};
    use serde_json::json;
    use std::sync::Arc;
    use std::time::Duration;

    fn ids(html: &str) -> Vec<String> {
        let document = Html::parse_document(html);
        let selector = Selector::parse("[id]").unwrap();
        document
            .select(&selector)
            .filter_map(|el| el.value().attr("id").map(str::to_string))
            .collect()
    }

    #[test]
    fn test_resume_page_exposes_controls() {
        let html = render_resume_page(&ResumeView::default(), None);
        let ids = ids(&html);
        for id in ["resume", "job_desc", "summaryBox", "detailsBox", "analyzeBtn", "downloadPdfBtn"] {
            assert!(ids.iter().any(|found| found == id), "missing #{}", id);
        }
        assert!(!ids.iter().any(|found| found == "alertDialog"));
    }

    #[test]
    fn test_jobs_page_exposes_controls_and_alert() {
        let html = render_jobs_page(&JobsView::default(), Some("PDF Error: render failed"));
        let ids = ids(&html);
        for id in ["qualifications", "achievements", "jobsBox", "searchBtn", "downloadJobsPdfBtn"] {
            assert!(ids.iter().any(|found| found == id), "missing #{}", id);
        }

        let document = Html::parse_document(&html);
        let dialog = Selector::parse("dialog#alertDialog p").unwrap();
        let text: String = document.select(&dialog).flat_map(|el| el.text()).collect();
        assert_eq!(text, "PDF Error: render failed");
    }

    #[test]
    fn test_inputs_are_escaped() {
        let mut view = ResumeView::default();
        view.resume = "</textarea><script>x</script>".to_string();
        let html = render_resume_page(&view, None);
        let document = Html::parse_document(&html);
        let script = Selector::parse("body script").unwrap();
        assert_eq!(document.select(&script).count(), 0);
    }

    fn search_button_disabled(html: &str) -> bool {
        let document = Html::parse_document(html);
        let button = Selector::parse("#searchBtn").unwrap();
        document
            .select(&button)
            .next()
            .map(|el| el.value().attr("disabled").is_some())
            .unwrap_or(false)
    }

    #[tokio::test]
    async fn test_search_button_disabled_while_pending() {
        let backend = Arc::new(ScriptedBackend::default());
        backend.push_jobs_delayed(json!({"raw": "1. Data Analyst"}), Duration::from_millis(100));
        let ui = UiController::new(backend);

        let (_, in_flight) = tokio::join!(ui.search_jobs("q".into(), String::new()), async {
            tokio::time::sleep(Duration::from_millis(20)).await;
            render_jobs_page(&ui.jobs_view().await, None)
        });

        assert!(search_button_disabled(&in_flight));
        let document = Html::parse_document(&in_flight);
        let jobs = Selector::parse("#jobsBox").unwrap();
        let text: String = document.select(&jobs).flat_map(|el| el.text()).collect();
        assert_eq!(text, "Searching...");

        let settled = render_jobs_page(&ui.jobs_view().await, None);
        assert!(!search_button_disabled(&settled));
    }
}
