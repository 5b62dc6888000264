// src/web/types.rs
use anyhow::Result;
use async_trait::async_trait;
use rocket::form::FromForm;
use rocket::http::ContentType;
use rocket::response::{self, Responder};
use rocket::{Request, Response};
use std::sync::{Mutex, PoisonError};

use crate::controller::UserAgent;

pub struct PdfResponse {
    pub data: Vec<u8>,
    pub filename: Option<String>,
}

impl PdfResponse {
    pub fn with_filename(data: Vec<u8>, filename: String) -> Self {
        Self {
            data,
            filename: Some(filename),
        }
    }
}

impl<'r> Responder<'r, 'static> for PdfResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let mut binding = Response::build();
        let mut response = binding
            .header(ContentType::PDF)
            .sized_body(self.data.len(), std::io::Cursor::new(self.data));

        if let Some(filename) = self.filename {
            response = response.raw_header(
                "Content-Disposition",
                format!("attachment; filename=\"{}\"", filename.replace('"', "'")),
            );
        }

        response.ok()
    }
}

#[derive(Debug, FromForm)]
pub struct AnalyzeForm {
    pub resume: Option<String>,
    pub job_desc: Option<String>,
}

#[derive(Debug, FromForm)]
pub struct SearchForm {
    pub qualifications: Option<String>,
    pub achievements: Option<String>,
}

/// Collects the outcome of one export request so the route can answer with
/// the document or with the page and its alert dialog.
#[derive(Default)]
pub struct BrowserAgent {
    download: Mutex<Option<(String, Vec<u8>)>>,
    alert: Mutex<Option<String>>,
}

impl BrowserAgent {
    pub fn take_download(&self) -> Option<(String, Vec<u8>)> {
        self.download
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    pub fn take_alert(&self) -> Option<String> {
        self.alert.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

#[async_trait]
impl UserAgent for BrowserAgent {
    async fn download(&self, file_name: &str, document: Vec<u8>) -> Result<()> {
        *self.download.lock().unwrap_or_else(PoisonError::into_inner) =
            Some((file_name.to_string(), document));
        Ok(())
    }

    fn alert(&self, message: &str) {
        *self.alert.lock().unwrap_or_else(PoisonError::into_inner) = Some(message.to_string());
    }
}
