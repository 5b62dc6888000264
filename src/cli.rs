// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use crate::controller::{JobsView, ResumeView, TerminalAgent, UiController};
use crate::core::{ConfigManager, ServiceClient};
use crate::view::Region;
use crate::web::start_web_server;

#[derive(Parser, Debug)]
#[command(name = "cvlens")]
#[command(about = "Resume analyzer and job search front end")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Base URL of the analysis service (overrides configuration)
    #[arg(long, global = true)]
    pub api_url: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the web UI
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
    /// Compare a resume with a job description
    Analyze {
        /// File holding the resume text
        #[arg(long)]
        resume: PathBuf,
        /// File holding the job description
        #[arg(long)]
        job: PathBuf,
        /// Save the PDF report, into the configured download directory unless one is given
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        pdf: Option<Option<PathBuf>>,
    },
    /// Suggest roles for a set of qualifications
    Search {
        #[arg(long)]
        qualifications: PathBuf,
        #[arg(long)]
        achievements: Option<PathBuf>,
        /// Save the PDF report, into the configured download directory unless one is given
        #[arg(long, value_name = "DIR", num_args = 0..=1)]
        pdf: Option<Option<PathBuf>>,
    },
}

pub async fn handle_command(cli: Cli, mut config: ConfigManager) -> Result<()> {
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }

    match cli.command {
        Command::Serve { port } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            start_web_server(&config).await
        }

        Command::Analyze { resume, job, pdf } => {
            let resume = read_input(&resume).await?;
            let job_description = read_input(&job).await?;
            let controller = controller(&config)?;

            info!("Running resume analysis against {}", config.api.base_url);
            controller.analyze(resume, job_description).await;
            print_resume(&controller.resume_view().await);

            if let Some(dir) = pdf {
                let agent = TerminalAgent::new(dir.unwrap_or_else(|| config.download_dir.clone()));
                controller.download_resume_pdf(&agent).await?;
            }
            Ok(())
        }

        Command::Search {
            qualifications,
            achievements,
            pdf,
        } => {
            let qualifications = read_input(&qualifications).await?;
            let achievements = match achievements {
                Some(path) => read_input(&path).await?,
                None => String::new(),
            };
            let controller = controller(&config)?;

            info!("Running job search against {}", config.api.base_url);
            controller.search_jobs(qualifications, achievements).await;
            print_jobs(&controller.jobs_view().await);

            if let Some(dir) = pdf {
                let agent = TerminalAgent::new(dir.unwrap_or_else(|| config.download_dir.clone()));
                controller.download_jobs_pdf(&agent).await?;
            }
            Ok(())
        }
    }
}

fn controller(config: &ConfigManager) -> Result<UiController> {
    let client = ServiceClient::new(config.api.base_url.clone(), config.api.timeout_seconds)?;
    Ok(UiController::new(Arc::new(client)))
}

async fn read_input(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read input file: {}", path.display()))
}

fn print_region(region: &Region) {
    let outline = region.outline();
    if !outline.is_empty() {
        println!("{}", outline);
    }
}

fn print_resume(view: &ResumeView) {
    print_region(&view.summary);
    println!();
    print_region(&view.details);
}

fn print_jobs(view: &JobsView) {
    print_region(&view.jobs);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "cvlens",
            "analyze",
            "--resume",
            "resume.txt",
            "--job",
            "job.txt",
            "--pdf",
            "out",
            "--api-url",
            "http://analysis:5000",
        ])
        .unwrap();

        assert_eq!(cli.api_url.as_deref(), Some("http://analysis:5000"));
        match cli.command {
            Command::Analyze { resume, job, pdf } => {
                assert_eq!(resume, PathBuf::from("resume.txt"));
                assert_eq!(job, PathBuf::from("job.txt"));
                assert_eq!(pdf, Some(Some(PathBuf::from("out"))));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_search_requires_qualifications() {
        assert!(Cli::try_parse_from(["cvlens", "search"]).is_err());

        let cli = Cli::try_parse_from(["cvlens", "search", "--qualifications", "q.txt"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Search {
                achievements: None,
                pdf: None,
                ..
            }
        ));
    }

    #[test]
    fn test_bare_pdf_flag_uses_configured_directory() {
        let cli = Cli::try_parse_from([
            "cvlens",
            "search",
            "--qualifications",
            "q.txt",
            "--pdf",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::Search { pdf: Some(None), .. }));
    }
}
