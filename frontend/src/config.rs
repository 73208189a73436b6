//! Application configuration.
//!
//! Centralized configuration for the upload frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// All endpoints (`/upload/`, `/dashboard/...`, `/uploads/`) hang off it.
pub const API_BASE_URL: &str = "http://localhost:8000/api";

/// Application name shown in the header.
pub const APP_NAME: &str = "IC Lab Soft";

/// Maximum archives per upload on the home page.
pub const MAX_FILES: usize = 5;

/// Stats refresh interval on the dashboard (in milliseconds).
pub const STATS_POLL_INTERVAL_MS: u32 = 10_000;

/// Drive the upload banner with timed steps instead of sending the files.
///
/// Useful to demo the page without a backend.
pub const SIMULATED_UPLOAD: bool = false;

/// Delay between simulated 10% steps (in milliseconds).
pub const SIMULATED_STEP_MS: u32 = 200;

/// Pause after the last simulated step before reporting success.
pub const SIMULATED_FINISH_MS: u32 = 500;

/// Selection cap and listing page size shared with the core crate.
pub use pecas_core::{DEFAULT_MAX_FILES, DEFAULT_PAGE_SIZE};
