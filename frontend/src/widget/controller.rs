//! Upload widget state machine.
//!
//! [`UploadWidget::dispatch`] applies one [`WidgetEvent`] and returns the
//! [`Effect`]s the runtime must perform. The widget never touches the DOM
//! or the network itself, which keeps every transition testable natively.

use crate::config::FINISH_DELAY_MS;
use crate::format::format_file_size;
use crate::types::{validate_candidate, AppError, AppResult, PickedFile, RawReply, Status};

use super::event::{Effect, FlowId, ReportRequest, WidgetEvent};
use super::progress::{RequestKind, COMPLETE};

/// The request currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Flow {
    id: FlowId,
    kind: RequestKind,
}

/// Upload widget controller.
///
/// Owns the selected file; everything else is transient display state.
#[derive(Clone, Debug)]
pub struct UploadWidget<F> {
    selected_file: Option<F>,
    status: Option<Status>,
    progress: Option<u8>,
    flow: Option<Flow>,
    last_flow: FlowId,
    drag_over: bool,
}

impl<F: PickedFile> Default for UploadWidget<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PickedFile> UploadWidget<F> {
    pub fn new() -> Self {
        Self {
            selected_file: None,
            status: None,
            progress: None,
            flow: None,
            last_flow: 0,
            drag_over: false,
        }
    }

    // -------------------------------------------------------------------------
    // Rendering accessors
    // -------------------------------------------------------------------------

    pub fn selected_file(&self) -> Option<&F> {
        self.selected_file.as_ref()
    }

    /// `(name, formatted size)` for the file info line.
    pub fn file_summary(&self) -> Option<(String, String)> {
        self.selected_file
            .as_ref()
            .map(|file| (file.name(), format_file_size(file.size())))
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    /// Progress bar percentage; `None` while the bar is hidden.
    pub fn progress(&self) -> Option<u8> {
        self.progress
    }

    pub fn is_busy(&self) -> bool {
        self.flow.is_some()
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    /// Whether the primary ("generate report") action is enabled.
    pub fn can_upload(&self) -> bool {
        !self.is_busy() && self.selected_file.is_some()
    }

    /// Whether the sample action is enabled.
    pub fn can_sample(&self) -> bool {
        !self.is_busy()
    }

    /// Whether "Start over" has anything to clear.
    pub fn can_reset(&self) -> bool {
        self.selected_file.is_some() || self.status.is_some() || self.is_busy()
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// Apply one event.
    pub fn dispatch(&mut self, event: WidgetEvent<F>) -> Vec<Effect<F>> {
        match event {
            WidgetEvent::FileChosen(candidate) => {
                self.select_file(candidate);
                Vec::new()
            }
            WidgetEvent::DragOver => {
                self.drag_over = true;
                Vec::new()
            }
            WidgetEvent::DragLeave => {
                self.drag_over = false;
                Vec::new()
            }
            WidgetEvent::Dropped(candidate) => {
                self.drag_over = false;
                self.select_file(candidate);
                Vec::new()
            }
            WidgetEvent::BrowseRequested => vec![Effect::OpenPicker],
            WidgetEvent::FileRemoved => self.clear_file(),
            WidgetEvent::UploadRequested => self.submit_upload(),
            WidgetEvent::SampleRequested => self.submit_sample(),
            WidgetEvent::EnterPressed => {
                if self.can_upload() {
                    self.submit_upload()
                } else {
                    Vec::new()
                }
            }
            WidgetEvent::Reset => {
                log::info!("Widget reset");
                *self = Self {
                    last_flow: self.last_flow,
                    ..Self::new()
                };
                vec![Effect::ResetPicker]
            }
            WidgetEvent::ProgressTick { flow, percent } => {
                self.advance(flow, percent);
                Vec::new()
            }
            WidgetEvent::Responded { flow, reply } => self.on_response(flow, reply),
            WidgetEvent::Finished { flow, message } => {
                self.on_finished(flow, message);
                Vec::new()
            }
        }
    }

    fn select_file(&mut self, candidate: Option<F>) {
        let Some(file) = candidate else {
            return;
        };

        if let Err(e) = validate_candidate(&file) {
            log::warn!("Rejected file '{}': {}", file.name(), e);
            self.status = Some(Status::error(e.to_string()));
            return;
        }

        log::info!(
            "Selected '{}' ({})",
            file.name(),
            format_file_size(file.size())
        );
        self.selected_file = Some(file);
        self.status = None;
    }

    fn clear_file(&mut self) -> Vec<Effect<F>> {
        if let Some(file) = self.selected_file.take() {
            log::info!("Removed '{}'", file.name());
        }
        self.status = None;
        vec![Effect::ResetPicker]
    }

    fn submit_upload(&mut self) -> Vec<Effect<F>> {
        let Some(file) = self.selected_file.clone() else {
            self.status = Some(Status::error("Please select a file first"));
            return Vec::new();
        };
        self.start(ReportRequest::Upload(file))
    }

    fn submit_sample(&mut self) -> Vec<Effect<F>> {
        self.start(ReportRequest::Sample)
    }

    fn start(&mut self, request: ReportRequest<F>) -> Vec<Effect<F>> {
        let kind = request.kind();
        if let Some(active) = self.flow {
            log::debug!("Ignoring {:?} request, flow {} still running", kind, active.id);
            return Vec::new();
        }

        self.last_flow += 1;
        let id = self.last_flow;
        self.flow = Some(Flow { id, kind });
        self.status = None;

        let script = kind.script();
        self.progress = Some(script.started);
        log::info!("Starting {:?} request (flow {})", kind, id);

        let mut effects: Vec<Effect<F>> = script
            .timed
            .iter()
            .map(|&(delay_ms, percent)| Effect::Schedule {
                delay_ms,
                event: WidgetEvent::ProgressTick { flow: id, percent },
            })
            .collect();
        effects.push(Effect::Send { flow: id, request });
        effects
    }

    /// Returns the active flow when `id` refers to it.
    fn active(&self, id: FlowId) -> Option<Flow> {
        self.flow.filter(|flow| flow.id == id)
    }

    /// Move the bar forward; stale or backward steps are dropped.
    fn advance(&mut self, id: FlowId, percent: u8) {
        if self.active(id).is_none() {
            log::debug!("Dropping progress {}% for finished flow {}", percent, id);
            return;
        }
        if self.progress.map_or(true, |current| percent > current) {
            self.progress = Some(percent);
        }
    }

    fn on_response(&mut self, id: FlowId, reply: AppResult<RawReply>) -> Vec<Effect<F>> {
        let Some(flow) = self.active(id) else {
            log::debug!("Dropping response for finished flow {}", id);
            return Vec::new();
        };
        let script = flow.kind.script();

        let raw = match reply {
            Ok(raw) => raw,
            Err(e) => {
                self.fail(flow, e);
                return Vec::new();
            }
        };
        self.advance(id, script.responded);

        let decoded = raw.decode(flow.kind.fallback_error());
        self.advance(id, script.decoded);

        match decoded {
            Ok(response) => {
                self.advance(id, COMPLETE);
                let message = response
                    .message
                    .filter(|msg| !msg.trim().is_empty())
                    .unwrap_or_else(|| flow.kind.success_text().to_string());
                log::info!(
                    "{:?} request succeeded (flow {}), report at {}",
                    flow.kind,
                    id,
                    response.pdf_path.as_deref().unwrap_or("unknown path")
                );
                vec![Effect::Schedule {
                    delay_ms: FINISH_DELAY_MS,
                    event: WidgetEvent::Finished { flow: id, message },
                }]
            }
            Err(e) => {
                self.fail(flow, e);
                Vec::new()
            }
        }
    }

    fn fail(&mut self, flow: Flow, error: AppError) {
        log::error!("{:?} request failed (flow {}): {}", flow.kind, flow.id, error);
        self.flow = None;
        self.progress = None;
        self.status = Some(Status::error(error.to_string()));
    }

    fn on_finished(&mut self, id: FlowId, message: String) {
        if self.active(id).is_none() {
            log::debug!("Dropping completion for finished flow {}", id);
            return;
        }
        self.flow = None;
        self.progress = None;
        self.status = Some(Status::Download { text: message });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MemoryFile, StatusKind};

    type Widget = UploadWidget<MemoryFile>;
    type Event = WidgetEvent<MemoryFile>;

    fn csv(name: &str, len: usize) -> MemoryFile {
        MemoryFile::new(name, vec![b'x'; len])
    }

    fn with_file() -> Widget {
        let mut widget = Widget::new();
        widget.dispatch(Event::FileChosen(Some(csv("report.csv", 10))));
        widget
    }

    /// Starts a request and returns the id carried by its `Send` effect.
    fn start(widget: &mut Widget, event: Event) -> FlowId {
        widget
            .dispatch(event)
            .into_iter()
            .find_map(|effect| match effect {
                Effect::Send { flow, .. } => Some(flow),
                _ => None,
            })
            .expect("request should be sent")
    }

    /// Feeds a reply; returns the scheduled completion, if any.
    fn respond(widget: &mut Widget, flow: FlowId, status: u16, body: &str) -> Option<Event> {
        widget
            .dispatch(Event::Responded {
                flow,
                reply: Ok(RawReply::new(status, body)),
            })
            .into_iter()
            .find_map(|effect| match effect {
                Effect::Schedule { event, .. } => Some(event),
                _ => None,
            })
    }

    #[test]
    fn test_initial_state() {
        let widget = Widget::new();
        assert!(widget.selected_file().is_none());
        assert!(!widget.can_upload());
        assert!(widget.can_sample());
        assert_eq!(widget.status(), None);
        assert_eq!(widget.progress(), None);
    }

    #[test]
    fn test_select_csv_file() {
        let widget = with_file();
        assert_eq!(
            widget.file_summary(),
            Some(("report.csv".to_string(), "10 Bytes".to_string()))
        );
        assert!(widget.can_upload());
        assert_eq!(widget.status(), None);
    }

    #[test]
    fn test_non_csv_is_rejected_and_keeps_previous_file() {
        let mut widget = with_file();
        let effects = widget.dispatch(Event::FileChosen(Some(csv("notes.txt", 4))));

        assert!(effects.is_empty());
        assert_eq!(widget.selected_file().map(|f| f.name.as_str()), Some("report.csv"));
        let status = widget.status().unwrap();
        assert_eq!(status.kind(), StatusKind::Error);
        assert_eq!(status.text(), "Please select a CSV file");
    }

    #[test]
    fn test_non_csv_on_empty_widget_stays_empty() {
        let mut widget = Widget::new();
        widget.dispatch(Event::Dropped(Some(csv("image.png", 4))));
        assert!(widget.selected_file().is_none());
        assert!(!widget.can_upload());
    }

    #[test]
    fn test_empty_selection_is_a_no_op() {
        let mut widget = with_file();
        widget.dispatch(Event::FileChosen(None));
        assert!(widget.selected_file().is_some());
        assert_eq!(widget.status(), None);
    }

    #[test]
    fn test_valid_selection_hides_previous_error() {
        let mut widget = Widget::new();
        widget.dispatch(Event::FileChosen(Some(csv("a.json", 1))));
        assert!(widget.status().is_some());

        widget.dispatch(Event::FileChosen(Some(csv("a.csv", 1))));
        assert_eq!(widget.status(), None);
    }

    #[test]
    fn test_drag_highlight() {
        let mut widget = Widget::new();
        widget.dispatch(Event::DragOver);
        assert!(widget.is_drag_over());
        widget.dispatch(Event::DragLeave);
        assert!(!widget.is_drag_over());

        widget.dispatch(Event::DragOver);
        widget.dispatch(Event::Dropped(Some(csv("dropped.csv", 3))));
        assert!(!widget.is_drag_over());
        assert_eq!(widget.file_summary().unwrap().0, "dropped.csv");
    }

    #[test]
    fn test_browse_opens_picker() {
        let mut widget = Widget::new();
        assert_eq!(widget.dispatch(Event::BrowseRequested), vec![Effect::OpenPicker]);
    }

    #[test]
    fn test_remove_file_disables_upload() {
        let mut widget = with_file();
        let effects = widget.dispatch(Event::FileRemoved);

        assert_eq!(effects, vec![Effect::ResetPicker]);
        assert!(widget.selected_file().is_none());
        assert_eq!(widget.file_summary(), None);
        assert!(!widget.can_upload());
        assert_eq!(widget.status(), None);
    }

    #[test]
    fn test_upload_without_file() {
        let mut widget = Widget::new();
        let effects = widget.dispatch(Event::UploadRequested);

        assert!(effects.is_empty());
        assert_eq!(widget.status(), Some(&Status::error("Please select a file first")));
        assert!(!widget.is_busy());
    }

    #[test]
    fn test_upload_start_effects() {
        let mut widget = with_file();
        let effects = widget.dispatch(Event::UploadRequested);

        assert_eq!(
            effects,
            vec![
                Effect::Schedule {
                    delay_ms: 300,
                    event: Event::ProgressTick { flow: 1, percent: 30 },
                },
                Effect::Schedule {
                    delay_ms: 600,
                    event: Event::ProgressTick { flow: 1, percent: 50 },
                },
                Effect::Send {
                    flow: 1,
                    request: ReportRequest::Upload(csv("report.csv", 10)),
                },
            ]
        );
        assert_eq!(widget.progress(), Some(10));
        assert!(!widget.can_upload());
        assert!(!widget.can_sample());
    }

    #[test]
    fn test_successful_upload_shows_download() {
        let mut widget = with_file();
        let flow = start(&mut widget, Event::UploadRequested);
        widget.dispatch(Event::ProgressTick { flow, percent: 30 });
        assert_eq!(widget.progress(), Some(30));

        let finish = respond(&mut widget, flow, 200, r#"{"success": true}"#).unwrap();
        assert_eq!(widget.progress(), Some(100));
        assert!(widget.is_busy());

        widget.dispatch(finish);
        assert_eq!(widget.progress(), None);
        assert_eq!(
            widget.status(),
            Some(&Status::Download {
                text: "Report generated successfully!".into()
            })
        );
        assert!(widget.can_upload());
        assert!(widget.can_sample());
    }

    #[test]
    fn test_server_message_replaces_default_success_text() {
        let mut widget = with_file();
        let flow = start(&mut widget, Event::UploadRequested);
        let finish = respond(
            &mut widget,
            flow,
            200,
            r#"{"success": true, "message": "Sample report generated successfully!"}"#,
        )
        .unwrap();
        assert_eq!(
            finish,
            Event::Finished {
                flow,
                message: "Sample report generated successfully!".into()
            }
        );
    }

    #[test]
    fn test_reported_failure_is_shown_verbatim() {
        let mut widget = with_file();
        let flow = start(&mut widget, Event::UploadRequested);
        let finish = respond(&mut widget, flow, 200, r#"{"success": false, "error": "bad format"}"#);

        assert!(finish.is_none());
        assert_eq!(widget.status(), Some(&Status::error("bad format")));
        assert_eq!(widget.progress(), None);
        assert!(widget.can_upload());
        assert!(widget.can_sample());
        assert!(widget.selected_file().is_some());
    }

    #[test]
    fn test_http_error_without_message_uses_fallback() {
        let mut widget = with_file();
        let flow = start(&mut widget, Event::UploadRequested);
        respond(&mut widget, flow, 500, "{}");
        assert_eq!(widget.status(), Some(&Status::error("Error generating report")));
    }

    #[test]
    fn test_network_failure() {
        let mut widget = with_file();
        let flow = start(&mut widget, Event::UploadRequested);
        widget.dispatch(Event::Responded {
            flow,
            reply: Err(AppError::Network("Failed to fetch".into())),
        });

        assert_eq!(widget.status(), Some(&Status::error("Network error: Failed to fetch")));
        assert_eq!(widget.progress(), None);
        assert!(widget.can_upload());
    }

    #[test]
    fn test_sample_without_file() {
        let mut widget = Widget::new();
        let effects = widget.dispatch(Event::SampleRequested);
        assert!(effects.contains(&Effect::Send {
            flow: 1,
            request: ReportRequest::Sample,
        }));
        assert!(effects.contains(&Effect::Schedule {
            delay_ms: 600,
            event: Event::ProgressTick { flow: 1, percent: 60 },
        }));

        let finish = respond(&mut widget, 1, 200, r#"{"success": true}"#).unwrap();
        widget.dispatch(finish);
        assert!(matches!(widget.status(), Some(Status::Download { .. })));
        assert!(!widget.can_upload());
        assert!(widget.can_sample());
    }

    #[test]
    fn test_sample_failure_keeps_file() {
        let mut widget = with_file();
        let flow = start(&mut widget, Event::SampleRequested);
        respond(&mut widget, flow, 500, r#"{"error": "Error generating sample report: boom"}"#);

        assert_eq!(
            widget.status(),
            Some(&Status::error("Error generating sample report: boom"))
        );
        assert!(widget.can_upload());
    }

    #[test]
    fn test_busy_widget_refuses_new_requests() {
        let mut widget = with_file();
        start(&mut widget, Event::UploadRequested);

        assert!(widget.dispatch(Event::SampleRequested).is_empty());
        assert!(widget.dispatch(Event::UploadRequested).is_empty());
        assert!(widget.dispatch(Event::EnterPressed).is_empty());
    }

    #[test]
    fn test_enter_submits_only_with_file() {
        let mut widget = Widget::new();
        assert!(widget.dispatch(Event::EnterPressed).is_empty());
        assert_eq!(widget.status(), None);

        let mut widget = with_file();
        let effects = widget.dispatch(Event::EnterPressed);
        assert!(effects.iter().any(|e| matches!(e, Effect::Send { .. })));
    }

    #[test]
    fn test_late_tick_does_not_move_bar_backwards() {
        let mut widget = with_file();
        let flow = start(&mut widget, Event::UploadRequested);
        widget.dispatch(Event::Responded {
            flow,
            reply: Ok(RawReply::new(200, r#"{"success": true}"#)),
        });
        widget.dispatch(Event::ProgressTick { flow, percent: 50 });
        assert_eq!(widget.progress(), Some(100));
    }

    #[test]
    fn test_ticks_after_failure_keep_bar_hidden() {
        let mut widget = with_file();
        let flow = start(&mut widget, Event::UploadRequested);
        respond(&mut widget, flow, 400, r#"{"error": "No file uploaded"}"#);

        widget.dispatch(Event::ProgressTick { flow, percent: 30 });
        assert_eq!(widget.progress(), None);
    }

    #[test]
    fn test_stale_events_from_previous_flow_are_ignored() {
        let mut widget = with_file();
        let first = start(&mut widget, Event::UploadRequested);
        respond(&mut widget, first, 500, "{}");

        let second = start(&mut widget, Event::UploadRequested);
        assert_ne!(first, second);

        widget.dispatch(Event::ProgressTick { flow: first, percent: 50 });
        assert_eq!(widget.progress(), Some(10));
        widget.dispatch(Event::Finished {
            flow: first,
            message: "old".into(),
        });
        assert!(widget.is_busy());
        assert_eq!(widget.status(), None);
    }

    #[test]
    fn test_new_request_clears_previous_status() {
        let mut widget = with_file();
        let flow = start(&mut widget, Event::UploadRequested);
        respond(&mut widget, flow, 200, r#"{"success": false, "error": "bad format"}"#);
        assert!(widget.status().is_some());

        start(&mut widget, Event::UploadRequested);
        assert_eq!(widget.status(), None);
    }

    #[test]
    fn test_remove_during_upload_keeps_request_running() {
        let mut widget = with_file();
        let flow = start(&mut widget, Event::UploadRequested);
        widget.dispatch(Event::FileRemoved);

        let finish = respond(&mut widget, flow, 200, r#"{"success": true}"#).unwrap();
        widget.dispatch(finish);
        assert!(matches!(widget.status(), Some(Status::Download { .. })));
        assert!(!widget.can_upload());
    }

    #[test]
    fn test_reset_during_request_drops_its_reply() {
        let mut widget = with_file();
        let stale = start(&mut widget, Event::UploadRequested);
        widget.dispatch(Event::Reset);
        assert!(widget.can_sample());
        assert!(!widget.can_reset());

        widget.dispatch(Event::FileChosen(Some(csv("second.csv", 2))));
        let current = start(&mut widget, Event::UploadRequested);
        assert_ne!(stale, current);

        let finish = respond(&mut widget, stale, 200, r#"{"success": true}"#);
        assert!(finish.is_none());
        assert_eq!(widget.progress(), Some(10));
        assert!(widget.is_busy());
        assert_eq!(widget.status(), None);
    }

    #[test]
    fn test_can_reset() {
        let mut widget = Widget::new();
        assert!(!widget.can_reset());

        widget.dispatch(Event::FileChosen(Some(csv("notes.txt", 1))));
        assert!(widget.can_reset());

        widget.dispatch(Event::Reset);
        widget.dispatch(Event::SampleRequested);
        assert!(widget.can_reset());
    }

    #[test]
    fn test_reset() {
        let mut widget = with_file();
        widget.dispatch(Event::FileChosen(Some(csv("x.txt", 1))));
        let effects = widget.dispatch(Event::Reset);

        assert_eq!(effects, vec![Effect::ResetPicker]);
        assert!(widget.selected_file().is_none());
        assert_eq!(widget.status(), None);
        assert!(!widget.is_busy());
    }
}
