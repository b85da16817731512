//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"InsightX • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-hint">
                "Tip: drag and drop your CSV file or press Ctrl+O to browse"
            </div>
        </footer>
    }
}
