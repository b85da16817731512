//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"InsightX"</h1>
            <p class="subtitle">
                "Automated Insight Engine. "
                "Upload your advertising data as CSV and get a ready-to-share PDF report."
            </p>
        </div>
    }
}
