use leptos::*;

/// Selected file line with a remove button.
#[component]
pub fn FileInfo(
    /// `(name, formatted size)` of the selected file
    #[prop(into)]
    summary: Signal<Option<(String, String)>>,
    /// Remove button handler
    #[prop(into)]
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="file-info" id="fileInfo" class:hidden=move || summary.with(Option::is_none)>
            <span class="file-icon">"📄"</span>
            <div class="file-details">
                <span class="file-name" id="fileName">
                    {move || summary.get().map(|(name, _)| name).unwrap_or_default()}
                </span>
                <span class="file-size" id="fileSize">
                    {move || summary.get().map(|(_, size)| size).unwrap_or_default()}
                </span>
            </div>
            <button
                class="remove-file"
                id="removeFile"
                title="Remove file"
                on:click=move |ev: ev::MouseEvent| {
                    // The line sits inside the drop zone, whose click opens the picker.
                    ev.stop_propagation();
                    on_remove.call(());
                }
            >
                "✕"
            </button>
        </div>
    }
}
