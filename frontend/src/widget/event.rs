//! Messages into the widget and side effects out of it.

use crate::types::{AppResult, RawReply};

use super::progress::RequestKind;

/// Identifier of one request flow.
pub type FlowId = u64;

/// A backend call to perform.
#[derive(Clone, Debug, PartialEq)]
pub enum ReportRequest<F> {
    /// Multipart upload of the given file.
    Upload(F),
    /// Sample report, no body.
    Sample,
}

impl<F> ReportRequest<F> {
    pub fn kind(&self) -> RequestKind {
        match self {
            ReportRequest::Upload(_) => RequestKind::Upload,
            ReportRequest::Sample => RequestKind::Sample,
        }
    }
}

/// Everything that can happen to the widget.
///
/// User input, timers and network results all arrive as events.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetEvent<F> {
    /// The native picker changed (`None` when nothing was chosen).
    FileChosen(Option<F>),
    /// A drag hovers over the drop zone.
    DragOver,
    /// The drag left the drop zone.
    DragLeave,
    /// Something was dropped; first file of the transfer, if any.
    Dropped(Option<F>),
    /// Drop zone clicked or Ctrl/Cmd+O.
    BrowseRequested,
    /// Remove button on the file info line.
    FileRemoved,
    /// "Generate report" clicked.
    UploadRequested,
    /// "Try sample data" clicked.
    SampleRequested,
    /// Enter pressed anywhere on the page.
    EnterPressed,
    /// Back to the initial state.
    Reset,
    /// A scheduled progress step fired.
    ProgressTick { flow: FlowId, percent: u8 },
    /// The backend answered, or the request failed.
    Responded {
        flow: FlowId,
        reply: AppResult<RawReply>,
    },
    /// The full bar has been shown long enough.
    Finished { flow: FlowId, message: String },
}

/// Work the runtime performs on behalf of the widget.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect<F> {
    /// Open the native file picker.
    OpenPicker,
    /// Clear the native file input's value.
    ResetPicker,
    /// Perform a backend call and answer with [`WidgetEvent::Responded`].
    Send {
        flow: FlowId,
        request: ReportRequest<F>,
    },
    /// Dispatch `event` after `delay_ms`, without cancellation.
    Schedule {
        delay_ms: u32,
        event: WidgetEvent<F>,
    },
}
