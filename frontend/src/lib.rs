//! Peças - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading ZIP/RAR archives of technical
//! drawings and browsing the parts the backend extracted from them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (Upload / Dashboard / Histórico)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  /           UploadPage                                      │
//! │              ├── Hero, FeatureCards                          │
//! │              └── UploadSection                               │
//! │                  ├── FileSelector                            │
//! │                  └── UploadStatusBanner                      │
//! │  /dashboard  DashboardPage                                   │
//! │              ├── stats (polled), part table, pagination      │
//! │              └── PartDetailModal                             │
//! │  /historico  HistoryPage                                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! State machines and wire types live in `pecas_core`.
//!
//! # Modules
//!
//! - [`config`] - Compile-time settings (API URL, limits, poll interval)
//! - [`types`] - Browser bindings of core types
//! - [`components`] - UI components
//! - [`services`] - Backend communication (JSON GETs, archive upload)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{files_from_list, BrowserFile};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main>
                <Routes>
                    <Route path="/" view=UploadPage/>
                    <Route path="/dashboard" view=DashboardPage/>
                    <Route path="/historico" view=HistoryPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn UploadPage() -> impl IntoView {
    view! {
        <div class="container">
            <Hero/>
            <UploadSection/>
            <FeatureCards/>
        </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="container">
            <h1>"Página não encontrada"</h1>
            <A href="/">"Voltar para o upload"</A>
        </div>
    }
}
