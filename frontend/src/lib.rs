//! InsightX - Frontend Rust/Leptos Application
//!
//! A WebAssembly upload widget: pick or drop a CSV file, let the backend
//! turn it into a PDF insight report, then download it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        App                               │
//! ├──────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                               │
//! │  UploadPanel                                             │
//! │  ├── drop zone + FileInfo                                │
//! │  ├── Generate Report / Try Sample Data                   │
//! │  ├── ProgressBar                                         │
//! │  └── StatusBanner (download link on success)             │
//! ├──────────────────────────────────────────────────────────┤
//! │  Footer                                                  │
//! └──────────────────────────────────────────────────────────┘
//!
//!   DOM events ──▶ Dispatcher ──▶ UploadWidget::dispatch ──▶ Effects
//!                      ▲                                       │
//!                      └──── timers / HttpTransport replies ◀──┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Status, RawReply, AppError, etc.)
//! - [`widget`] - Upload widget state machine and its Leptos runtime
//! - [`components`] - UI components (UploadPanel, StatusBanner, etc.)
//! - [`services`] - Backend communication

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod format;
pub mod types;
pub mod widget;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Helpers
pub use format::format_file_size;

// Types
pub use types::{
    // Files
    PickedFile, MemoryFile,
    // Status
    Status, StatusKind,
    // API
    ReportResponse, RawReply,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🚀 InsightX initialized");
    log::info!("💡 Tip: Drag and drop your CSV file or use Ctrl+O to browse");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="InsightX - Automated Insight Engine"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadPanel/>
        </div>

        <Footer/>
    }
}
