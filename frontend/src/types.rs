//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **File Types** - Candidate and selected files
//! - **Status Types** - Status banner variants
//! - **API Types** - Backend response structures
//! - **Error Types** - Frontend error handling

use serde::Deserialize;
use thiserror::Error;

use crate::config::{ACCEPTED_EXTENSION, MAX_FILE_SIZE};

// =============================================================================
// File Types
// =============================================================================

/// A file handed to the widget by the picker or a drop.
///
/// Implemented for `web_sys::File` in the browser and for [`MemoryFile`]
/// everywhere else.
pub trait PickedFile: Clone + 'static {
    /// File name as reported by the browser (no path).
    fn name(&self) -> String;
    /// Size in bytes.
    fn size(&self) -> u64;
}

impl PickedFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// In-memory file, used by tests and native tooling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MemoryFile {
    /// File name
    pub name: String,
    /// Binary content
    pub bytes: Vec<u8>,
}

impl MemoryFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }
}

impl PickedFile for MemoryFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// Check a candidate before it may be stored.
pub fn validate_candidate<F: PickedFile>(file: &F) -> AppResult<()> {
    if !file.name().ends_with(ACCEPTED_EXTENSION) {
        return Err(AppError::Validation("Please select a CSV file".to_string()));
    }
    if file.size() > MAX_FILE_SIZE {
        return Err(AppError::Validation("File is too large (max 16 MB)".to_string()));
    }
    Ok(())
}

// =============================================================================
// Status Types
// =============================================================================

/// Status banner flavour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

impl StatusKind {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            StatusKind::Info => "status-info",
            StatusKind::Success => "status-success",
            StatusKind::Error => "status-error",
        }
    }

    /// SVG path of the banner icon (24x24 outline).
    pub fn icon_path(&self) -> &'static str {
        match self {
            StatusKind::Info => "M13 16h-1v-4h-1m1-4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
            StatusKind::Success => "M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z",
            StatusKind::Error => "M12 8v4m0 4h.01M21 12a9 9 0 11-18 0 9 9 0 0118 0z",
        }
    }
}

/// What the status banner currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Plain banner with an icon and a message.
    Message { kind: StatusKind, text: String },
    /// Completed report, rendered with a download link.
    Download { text: String },
}

impl Status {
    pub fn error(text: impl Into<String>) -> Self {
        Status::Message {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    /// Banner flavour; the download banner counts as success.
    pub fn kind(&self) -> StatusKind {
        match self {
            Status::Message { kind, .. } => *kind,
            Status::Download { .. } => StatusKind::Success,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Status::Message { text, .. } | Status::Download { text } => text,
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// JSON body returned by `/upload` and `/generate-sample`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ReportResponse {
    /// Absent on error responses
    #[serde(default)]
    pub success: bool,
    /// Error message for failures
    #[serde(default)]
    pub error: Option<String>,
    /// Human readable success message
    #[serde(default)]
    pub message: Option<String>,
    /// Server-side path of the generated PDF
    #[serde(default)]
    pub pdf_path: Option<String>,
}

/// An HTTP response as received, before decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawReply {
    /// HTTP status code
    pub status: u16,
    /// Whether the status is 2xx
    pub ok: bool,
    /// Response body text
    pub body: String,
}

impl RawReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            ok: (200..300).contains(&status),
            body: body.into(),
        }
    }

    /// Decode into a successful [`ReportResponse`] or a server error.
    ///
    /// `fallback` is used when the body carries no usable error message.
    pub fn decode(&self, fallback: &str) -> AppResult<ReportResponse> {
        let response: ReportResponse = match serde_json::from_str(&self.body) {
            Ok(response) => response,
            Err(e) => {
                log::warn!("Unreadable response body (status {}): {}", self.status, e);
                return Err(AppError::Server(fallback.to_string()));
            }
        };

        if self.ok && response.success {
            return Ok(response);
        }

        let message = response
            .error
            .filter(|msg| !msg.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        Err(AppError::Server(message))
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// The `Display` output is exactly what the status banner shows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// Rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// Reported by the backend.
    #[error("{0}")]
    Server(String),

    /// Request never produced a readable response.
    #[error("Network error: {0}")]
    Network(String),

    /// Request could not be built.
    #[error("Request error: {0}")]
    Request(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
