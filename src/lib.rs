//! Presentation layer for the resume analyzer and job search tools.
//!
//! The [`controller::UiController`] posts form inputs to the analysis service,
//! renders the JSON it returns into display regions and exports reports as
//! PDF. It is driven by the server-rendered pages in [`web`] and by the
//! one-shot commands in [`cli`].

pub mod cli;
pub mod controller;
pub mod core;
pub mod error;
pub mod types;
pub mod view;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::{handle_command, Cli};
pub use controller::{AnalysisBackend, UiController};
pub use error::ClientError;
pub use web::start_web_server;
