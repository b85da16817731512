//! Backend services.
//!
//! # Services
//!
//! - [`report`] - CSV upload and sample report requests

pub mod report;

pub use report::*;
