// src/web/mod.rs
//! Server-rendered front end for the resume analyzer and job search pages

pub mod handlers;
pub mod session;
pub mod types;

pub use session::SessionStore;
pub use types::*;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::form::Form;
use rocket::http::CookieJar;
use rocket::response::content::RawHtml;
use rocket::{catchers, get, post, routes, Build, Rocket, State};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::controller::AnalysisBackend;
use crate::core::config_manager::ServerSettings;
use crate::core::{ConfigManager, ServiceClient};
use crate::view::pages::{render_index, render_message};

const BIND_ADDRESS: &str = "0.0.0.0";
/// Upper bound for url-encoded form posts, resume and job description included.
const FORM_LIMIT_MIB: u64 = 1;

#[get("/")]
pub fn index() -> RawHtml<String> {
    RawHtml(render_index())
}

#[get("/resume-analyzer")]
pub async fn resume_page(
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    handlers::resume_page_handler(sessions, cookies).await
}

#[post("/resume-analyzer/analyze", data = "<form>")]
pub async fn analyze(
    form: Form<AnalyzeForm>,
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    handlers::analyze_handler(form.into_inner(), sessions, cookies).await
}

#[post("/resume-analyzer/pdf")]
pub async fn resume_pdf(
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> Result<PdfResponse, RawHtml<String>> {
    handlers::resume_pdf_handler(sessions, cookies).await
}

#[get("/job-search")]
pub async fn jobs_page(sessions: &State<SessionStore>, cookies: &CookieJar<'_>) -> RawHtml<String> {
    handlers::jobs_page_handler(sessions, cookies).await
}

#[post("/job-search/search", data = "<form>")]
pub async fn search(
    form: Form<SearchForm>,
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> RawHtml<String> {
    handlers::search_handler(form.into_inner(), sessions, cookies).await
}

#[post("/job-search/pdf")]
pub async fn jobs_pdf(
    sessions: &State<SessionStore>,
    cookies: &CookieJar<'_>,
) -> Result<PdfResponse, RawHtml<String>> {
    handlers::jobs_pdf_handler(sessions, cookies).await
}

#[get("/health")]
pub fn health() -> &'static str {
    "OK"
}

// Error catchers
#[rocket::catch(404)]
pub fn not_found() -> RawHtml<String> {
    RawHtml(render_message("Not found", "This page does not exist."))
}

#[rocket::catch(413)]
pub fn payload_too_large() -> RawHtml<String> {
    RawHtml(render_message(
        "Input too large",
        "The submitted text exceeds 1 MiB. Shorten it and try again.",
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> RawHtml<String> {
    RawHtml(render_message("Invalid form", "The submitted form could not be read."))
}

#[rocket::catch(500)]
pub fn internal_error() -> RawHtml<String> {
    RawHtml(render_message(
        "Internal server error",
        "Try again in a few moments.",
    ))
}

/// Assemble the rocket instance; `backend` serves every session.
pub fn build_rocket(settings: &ServerSettings, backend: Arc<dyn AnalysisBackend>) -> Rocket<Build> {
    let mut figment = rocket::Config::figment()
        .merge(("address", BIND_ADDRESS))
        .merge(("port", settings.port))
        .merge(("limits", Limits::default().limit("form", FORM_LIMIT_MIB.mebibytes())));

    if let Some(secret_key) = &settings.secret_key {
        figment = figment.merge(("secret_key", secret_key.as_str()));
    }

    rocket::custom(figment)
        .manage(SessionStore::new(
            backend,
            Duration::from_secs(settings.session_idle_secs),
        ))
        .register(
            "/",
            catchers![not_found, payload_too_large, unprocessable, internal_error],
        )
        .mount(
            "/",
            routes![index, resume_page, analyze, resume_pdf, jobs_page, search, jobs_pdf, health],
        )
}

// Main server start function
pub async fn start_web_server(config: &ConfigManager) -> Result<()> {
    config.validate_for_server()?;
    let client = ServiceClient::new(config.api.base_url.clone(), config.api.timeout_seconds)?;

    info!("Starting cvlens web UI");
    info!("Environment: {}", config.environment);
    info!("Analysis service: {}", client.base_url());
    info!("Server: http://{}:{}", BIND_ADDRESS, config.server.port);

    let _rocket = build_rocket(&config.server, Arc::new(client))
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Web server failed: {}", e))?;

    Ok(())
}
