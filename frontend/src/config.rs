//! Application configuration.
//!
//! Centralized configuration for the InsightX upload widget.
//! Values are compile-time constants; the backend serves the widget, so
//! every endpoint is relative to the page origin unless an
//! [`Endpoints`] value with another base URL is injected.

/// Backend base URL.
///
/// Empty means "same origin as the page".
pub const BACKEND_URL: &str = "";

/// Multipart CSV upload endpoint.
pub const UPLOAD_PATH: &str = "/upload";

/// Sample report generation endpoint.
pub const SAMPLE_PATH: &str = "/generate-sample";

/// Generated PDF download endpoint (link target only).
pub const DOWNLOAD_PATH: &str = "/download-report";

/// Multipart form field carrying the CSV file.
pub const UPLOAD_FIELD: &str = "file";

/// Accepted filename suffix.
pub const ACCEPTED_EXTENSION: &str = ".csv";

/// Maximum file size accepted by the backend (in bytes).
///
/// 16 MB limit.
pub const MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

/// Delay between the first two scripted progress steps (ms).
pub const PROGRESS_STEP_MS: u32 = 300;

/// How long the full bar stays visible before the download banner (ms).
pub const FINISH_DELAY_MS: u32 = 500;

/// Resolved backend endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
}

impl Endpoints {
    /// Endpoints rooted at `base` (no trailing slash).
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// `POST` target for CSV uploads.
    pub fn upload(&self) -> String {
        format!("{}{}", self.base, UPLOAD_PATH)
    }

    /// `GET` target for the sample report.
    pub fn sample(&self) -> String {
        format!("{}{}", self.base, SAMPLE_PATH)
    }

    /// Download link for the last generated report.
    pub fn download(&self) -> String {
        format!("{}{}", self.base, DOWNLOAD_PATH)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}
