//! UI Components for the InsightX upload page.
//!
//! # Layout Components
//! - [`Hero`] - Title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadPanel`] - Drop zone, file info and actions, wired to the widget
//! - [`FileInfo`] - Selected file name, size and remove button
//! - [`ProgressBar`] - Scripted progress indicator
//! - [`StatusBanner`] - Info/success/error banner and download link

mod hero;
mod upload;
mod file_info;
mod progress;
mod status;
mod footer;

pub use hero::*;
pub use upload::*;
pub use file_info::*;
pub use progress::*;
pub use status::*;
pub use footer::*;
