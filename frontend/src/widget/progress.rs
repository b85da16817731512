//! Scripted progress for the two report requests.
//!
//! The bar never reflects transferred bytes; it follows a fixed script
//! keyed to timers and to the two network milestones.

use crate::config::PROGRESS_STEP_MS;

/// Percentage shown once a report is ready.
pub const COMPLETE: u8 = 100;

/// Which backend call a flow performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestKind {
    /// Multipart `POST` of the selected CSV.
    Upload,
    /// `GET` of the bundled sample report.
    Sample,
}

impl RequestKind {
    /// Progress script for this request.
    pub fn script(&self) -> ProgressScript {
        match self {
            RequestKind::Upload => ProgressScript {
                started: 10,
                timed: [(PROGRESS_STEP_MS, 30), (2 * PROGRESS_STEP_MS, 50)],
                responded: 70,
                decoded: 90,
            },
            RequestKind::Sample => ProgressScript {
                started: 10,
                timed: [(PROGRESS_STEP_MS, 30), (2 * PROGRESS_STEP_MS, 60)],
                responded: 85,
                decoded: 95,
            },
        }
    }

    /// Banner text when the backend gives no usable error message.
    pub fn fallback_error(&self) -> &'static str {
        match self {
            RequestKind::Upload => "Error generating report",
            RequestKind::Sample => "Error generating sample report",
        }
    }

    /// Banner text when the backend gives no success message.
    pub fn success_text(&self) -> &'static str {
        "Report generated successfully!"
    }
}

/// Fixed percentages of one request flow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressScript {
    /// Shown immediately when the request starts.
    pub started: u8,
    /// `(delay_ms, percent)` steps scheduled at start.
    pub timed: [(u32, u8); 2],
    /// Shown when the response arrives.
    pub responded: u8,
    /// Shown once the body is decoded.
    pub decoded: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripts_are_increasing() {
        for kind in [RequestKind::Upload, RequestKind::Sample] {
            let s = kind.script();
            let steps = [s.started, s.timed[0].1, s.timed[1].1, s.responded, s.decoded, COMPLETE];
            assert!(steps.windows(2).all(|w| w[0] < w[1]), "{:?}", kind);
            assert!(s.timed[0].0 < s.timed[1].0);
        }
    }

    #[test]
    fn test_upload_script_values() {
        let s = RequestKind::Upload.script();
        assert_eq!(s.started, 10);
        assert_eq!(s.timed, [(300, 30), (600, 50)]);
        assert_eq!((s.responded, s.decoded), (70, 90));
    }
}
