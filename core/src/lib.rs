//! # pecas-core - state and wire models for the peças upload dashboard
//!
//! Everything the browser app needs that does not touch the DOM: the JSON
//! shapes of the backend, client-side archive validation, and the state
//! machines behind the upload page and the dashboard. Keeping these here
//! lets them be tested natively.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐  files   ┌──────────────┐  events  ┌──────────────┐
//! │ FileSelection│────────▶│  validation  │────────▶│ UploadState  │
//! └──────────────┘          └──────────────┘          └──────────────┘
//!
//! ┌──────────────┐ actions  ┌──────────────┐ RequestId ┌──────────────┐
//! │  run_polling │────────▶│DashboardState│◀────────▶│   frontend   │
//! └──────────────┘          └──────────────┘           │   services   │
//!                                                      └──────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`error`] - [`ApiError`] and [`FileValidationError`]
//! - [`models`] - backend JSON types
//! - [`validation`] - size/extension checks before upload
//! - [`selection`] - capped file selection and drag state
//! - [`upload`] - upload status machine
//! - [`request`] - request generations for dropping stale responses
//! - [`dashboard`] - dashboard reducer
//! - [`endpoints`] - backend URL layout
//! - [`format`] - pt-BR number and date formatting
//! - [`poll`] - cancellable polling loop

pub mod error;
pub mod models;

pub mod validation;
pub mod selection;
pub mod upload;

pub mod request;
pub mod dashboard;
pub mod endpoints;
pub mod format;
pub mod poll;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ApiError, ApiResult, FileValidationError};

pub use models::{
    DashboardStats, GeneralStats, MaterialCount, ThicknessCount, RecentPart,
    PartPage, PartRecord, Pagination,
    PartDetail, PartHeader, PartStatistics, SubPartRecord,
    UploadResponse, UploadValidation,
};

pub use validation::{validate_file, file_extension, MAX_UPLOAD_SIZE, ALLOWED_EXTENSIONS, ACCEPT_ATTRIBUTE};
pub use selection::{FileSelection, SelectedFile, DragEvent, DragState, format_file_size, DEFAULT_MAX_FILES};
pub use request::RequestId;
pub use upload::{UploadEvent, UploadState, UploadStatus};

pub use dashboard::{
    DashboardAction, DashboardState, DetailState, PartsQuery,
    StatCard, BarDatum, PartRow, SubPartRow,
    stat_cards, detail_cards, material_bars, thickness_bars, subpart_rows,
    DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS,
};
pub use endpoints::Endpoints;
pub use format::{format_decimal, format_date, format_datetime};
pub use poll::{run_polling, CancelToken};
