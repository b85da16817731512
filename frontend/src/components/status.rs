//! Status banner: info, success and error messages, plus the
//! download link once a report is ready.

use leptos::*;

use crate::types::{Status, StatusKind};

#[component]
fn StatusIcon(kind: StatusKind) -> impl IntoView {
    view! {
        <svg class="w-5 h-5 flex-shrink-0" fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
                d=kind.icon_path()
            ></path>
        </svg>
    }
}

#[component]
pub fn StatusBanner(
    /// Current banner, `None` hides it
    #[prop(into)]
    status: Signal<Option<Status>>,
    /// Target of the "Download PDF" link
    #[prop(into)]
    download_href: String,
) -> impl IntoView {
    move || {
        status.get().map(|status| match status {
            Status::Message { kind, text } => view! {
                <div class=kind.css_class() id="statusMessage">
                    <StatusIcon kind=kind/>
                    <span>{text}</span>
                </div>
            }
            .into_view(),
            Status::Download { text } => view! {
                <div class={StatusKind::Success.css_class()} id="statusMessage">
                    <StatusIcon kind={StatusKind::Success}/>
                    <span class="flex-1">{text}</span>
                    <a href=download_href.clone() class="download-btn">
                        <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M4 16v1a3 3 0 003 3h10a3 3 0 003-3v-1m-4-4l-4 4m0 0l-4-4m4 4V4"
                            ></path>
                        </svg>
                        "Download PDF"
                    </a>
                </div>
            }
            .into_view(),
        })
    }
}
