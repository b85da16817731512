use leptos::*;

/// Scripted progress indicator, hidden while `progress` is `None`.
#[component]
pub fn ProgressBar(#[prop(into)] progress: Signal<Option<u8>>) -> impl IntoView {
    let label = move || format!("{}%", progress.get().unwrap_or(0));

    view! {
        <div
            class="progress-bar"
            id="progressBar"
            class:hidden=move || progress.get().is_none()
        >
            <div class="progress-track">
                <div class="progress-fill" id="progressFill" style:width=label></div>
            </div>
            <span class="progress-text" id="progressText">{label}</span>
        </div>
    }
}
