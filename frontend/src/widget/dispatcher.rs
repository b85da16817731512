//! Leptos runtime for [`UploadWidget`].
//!
//! Holds the widget in a signal, feeds it events and performs the
//! effects it returns.

use gloo_timers::future::TimeoutFuture;
use leptos::html::Input;
use leptos::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::services::ReportTransport;

use super::controller::UploadWidget;
use super::event::{Effect, WidgetEvent};

/// Event dispatcher shared by every handler of the upload panel.
pub struct Dispatcher<T: ReportTransport> {
    widget: RwSignal<UploadWidget<File>>,
    transport: StoredValue<T>,
    picker: NodeRef<Input>,
}

impl<T: ReportTransport> Clone for Dispatcher<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ReportTransport> Copy for Dispatcher<T> {}

impl<T: ReportTransport> Dispatcher<T> {
    pub fn new(transport: T, picker: NodeRef<Input>) -> Self {
        Self {
            widget: create_rw_signal(UploadWidget::new()),
            transport: store_value(transport),
            picker,
        }
    }

    /// Reactive widget state for rendering.
    pub fn widget(&self) -> RwSignal<UploadWidget<File>> {
        self.widget
    }

    /// Apply `event` and run the resulting effects.
    pub fn dispatch(&self, event: WidgetEvent<File>) {
        let mut effects = Vec::new();
        self.widget.update(|widget| effects = widget.dispatch(event));
        for effect in effects {
            self.run(effect);
        }
    }

    fn run(&self, effect: Effect<File>) {
        let this = *self;
        match effect {
            Effect::OpenPicker => {
                if let Some(input) = self.picker.get_untracked() {
                    input.click();
                }
            }
            Effect::ResetPicker => {
                if let Some(input) = self.picker.get_untracked() {
                    input.set_value("");
                }
            }
            Effect::Send { flow, request } => {
                let transport = self.transport.get_value();
                spawn_local(async move {
                    let reply = transport.send(request).await;
                    this.dispatch(WidgetEvent::Responded { flow, reply });
                });
            }
            Effect::Schedule { delay_ms, event } => {
                spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    this.dispatch(event);
                });
            }
        }
    }
}
