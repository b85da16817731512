//! CSV upload panel with drag & drop support.
//!
//! Wires DOM events to the [`Dispatcher`]; all decisions are made by
//! the widget state machine.

use leptos::*;
use web_sys::{Event, HtmlInputElement};

use crate::config::ACCEPTED_EXTENSION;
use crate::services::HttpTransport;
use crate::widget::{Dispatcher, WidgetEvent};
use crate::components::{FileInfo, ProgressBar, StatusBanner};

#[component]
pub fn UploadPanel(
    /// Backend transport, same-origin endpoints by default
    #[prop(optional)]
    transport: Option<HttpTransport>,
) -> impl IntoView {
    let transport = transport.unwrap_or_default();
    let download_href = transport.endpoints().download();

    let picker = create_node_ref::<html::Input>();
    let dispatcher = Dispatcher::new(transport, picker);
    let widget = dispatcher.widget();

    // Ctrl/Cmd+O opens the picker, Enter generates the report, Escape starts over
    let keys = window_event_listener(ev::keydown, move |ev| {
        if (ev.ctrl_key() || ev.meta_key()) && ev.key() == "o" {
            ev.prevent_default();
            dispatcher.dispatch(WidgetEvent::BrowseRequested);
        } else if ev.key() == "Enter" {
            dispatcher.dispatch(WidgetEvent::EnterPressed);
        } else if ev.key() == "Escape" && widget.with_untracked(|w| w.can_reset()) {
            dispatcher.dispatch(WidgetEvent::Reset);
        }
    });
    on_cleanup(move || keys.remove());

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        dispatcher.dispatch(WidgetEvent::FileChosen(file));
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        let file = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        dispatcher.dispatch(WidgetEvent::Dropped(file));
    };

    let summary = Signal::derive(move || widget.with(|w| w.file_summary()));
    let progress = Signal::derive(move || widget.with(|w| w.progress()));
    let status = Signal::derive(move || widget.with(|w| w.status().cloned()));

    view! {
        <div class="upload-widget">
            <div
                class="drop-zone"
                id="dropZone"
                class:drag-over=move || widget.with(|w| w.is_drag_over())
                on:click=move |_| dispatcher.dispatch(WidgetEvent::BrowseRequested)
                on:dragover=move |ev: ev::DragEvent| {
                    ev.prevent_default();
                    dispatcher.dispatch(WidgetEvent::DragOver);
                }
                on:dragleave=move |_| dispatcher.dispatch(WidgetEvent::DragLeave)
                on:drop=on_drop
            >
                <div class="upload-icon">"📤"</div>
                <div class="upload-text">"Drag & drop your CSV file here"</div>
                <div class="upload-hint">"or click to browse"</div>

                <FileInfo
                    summary=summary
                    on_remove=move |_: ()| dispatcher.dispatch(WidgetEvent::FileRemoved)
                />
            </div>

            // Outside the drop zone so the synthetic click does not bubble back into it
            <input
                type="file"
                id="fileInput"
                accept=ACCEPTED_EXTENSION
                style="display:none"
                node_ref=picker
                on:change=on_file_change
            />

            <div class="actions">
                <button
                    class="btn-primary"
                    id="generateBtn"
                    prop:disabled=move || !widget.with(|w| w.can_upload())
                    on:click=move |_| dispatcher.dispatch(WidgetEvent::UploadRequested)
                >
                    "Generate Report"
                </button>
                <button
                    class="btn-secondary"
                    id="sampleBtn"
                    prop:disabled=move || !widget.with(|w| w.can_sample())
                    on:click=move |_| dispatcher.dispatch(WidgetEvent::SampleRequested)
                >
                    "Try Sample Data"
                </button>
                <button
                    class="btn-link"
                    id="resetBtn"
                    class:hidden=move || !widget.with(|w| w.can_reset())
                    on:click=move |_| dispatcher.dispatch(WidgetEvent::Reset)
                >
                    "Start Over"
                </button>
            </div>

            <ProgressBar progress=progress/>
            <StatusBanner status=status download_href=download_href/>
        </div>
    }
}
