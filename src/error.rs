// src/error.rs
use thiserror::Error;

pub const NETWORK_ERROR: &str = "Network error";

/// Failures of the PDF export actions, in the form the user is shown them.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to the analysis service failed: {0:#}")]
    Transport(anyhow::Error),
    #[error("PDF generation rejected: {0}")]
    PdfRejected(String),
    #[error("could not save download: {0:#}")]
    Download(anyhow::Error),
}

impl ClientError {
    /// Text of the blocking alert raised for this failure.
    pub fn alert_message(&self) -> String {
        match self {
            ClientError::Transport(_) => format!("PDF Error: {}", NETWORK_ERROR),
            ClientError::PdfRejected(message) => format!("PDF Error: {}", message),
            ClientError::Download(e) => format!("Download failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_messages() {
        assert_eq!(
            ClientError::PdfRejected("render failed".to_string()).alert_message(),
            "PDF Error: render failed"
        );
        assert_eq!(
            ClientError::Transport(anyhow::anyhow!("connection refused")).alert_message(),
            "PDF Error: Network error"
        );
    }
}
