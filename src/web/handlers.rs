// src/web/handlers.rs
use rocket::http::CookieJar;
use rocket::response::content::RawHtml;
use rocket::State;
use tracing::{error, info};

use crate::controller::{Completion, JobsView, ResumeView};
use crate::view::pages::{render_jobs_page, render_resume_page};
use crate::web::session::SessionStore;
use crate::web::types::{AnalyzeForm, BrowserAgent, PdfResponse, SearchForm};

pub async fn resume_page_handler(
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    let view = match sessions.existing(cookies).await {
        Some(controller) => controller.resume_view().await,
        None => ResumeView::default(),
    };
    RawHtml(render_resume_page(&view, None))
}

pub async fn analyze_handler(
    form: AnalyzeForm,
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    let controller = sessions.controller(cookies).await;
    let resume = form.resume.unwrap_or_default();
    let job_description = form.job_desc.unwrap_or_default();

    info!(
        "Resume analysis requested (resume: {} chars, job description: {} chars)",
        resume.len(),
        job_description.len()
    );

    if controller.analyze(resume, job_description).await == Completion::Superseded {
        info!("Resume analysis superseded by a newer request");
    }

    RawHtml(render_resume_page(&controller.resume_view().await, None))
}

pub async fn resume_pdf_handler(
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> Result<PdfResponse, RawHtml<String>> {
    let controller = match sessions.existing(cookies).await {
        Some(controller) => controller,
        None => sessions.detached(),
    };
    let agent = BrowserAgent::default();

    let alert = match controller.download_resume_pdf(&agent).await {
        Ok(()) => match agent.take_download() {
            Some((file_name, data)) => return Ok(PdfResponse::with_filename(data, file_name)),
            None => "Download failed: no document received".to_string(),
        },
        Err(e) => {
            error!("Resume PDF export failed: {}", e);
            agent.take_alert().unwrap_or_else(|| e.alert_message())
        }
    };

    Err(RawHtml(render_resume_page(
        &controller.resume_view().await,
        Some(&alert),
    )))
}

pub async fn jobs_page_handler(
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    let view = match sessions.existing(cookies).await {
        Some(controller) => controller.jobs_view().await,
        None => JobsView::default(),
    };
    RawHtml(render_jobs_page(&view, None))
}

pub async fn search_handler(
    form: SearchForm,
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    let controller = sessions.controller(cookies).await;
    let qualifications = form.qualifications.unwrap_or_default();
    let achievements = form.achievements.unwrap_or_default();

    info!(
        "Job search requested (qualifications: {} chars, achievements: {} chars)",
        qualifications.len(),
        achievements.len()
    );

    if controller.search_jobs(qualifications, achievements).await == Completion::Superseded {
        info!("Job search superseded by a newer request");
    }

    RawHtml(render_jobs_page(&controller.jobs_view().await, None))
}

pub async fn jobs_pdf_handler(
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> Result<PdfResponse, RawHtml<String>> {
    let controller = match sessions.existing(cookies).await {
        Some(controller) => controller,
        None => sessions.detached(),
    };
    let agent = BrowserAgent::default();

    let alert = match controller.download_jobs_pdf(&agent).await {
        Ok(()) => match agent.take_download() {
            Some((file_name, data)) => return Ok(PdfResponse::with_filename(data, file_name)),
            None => "Download failed: no document received".to_string(),
        },
        Err(e) => {
            error!("Job recommendations PDF export failed: {}", e);
            agent.take_alert().unwrap_or_else(|| e.alert_message())
        }
    };

    Err(RawHtml(render_jobs_page(
        &controller.jobs_view().await,
        Some(&alert),
    )))
}
