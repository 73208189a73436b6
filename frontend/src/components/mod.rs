//! UI components of the peças app.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar with the route links
//! - [`Hero`] / [`FeatureCards`] - Upload page introduction
//!
//! # Upload
//! - [`FileSelector`] - Archive picker with drag & drop
//! - [`UploadStatusBanner`] - Phase message and progress bar
//! - [`UploadSection`] - Submit flow tying both together
//!
//! # Dashboard
//! - [`DashboardPage`] - Polled stats and the part table
//! - [`PaginationControls`] - Previous/next buttons
//! - [`PartDetailModal`] - Part detail overlay
//! - [`HistoryPage`] - Past uploads

mod header;
mod hero;
mod file_selector;
mod upload_status;
mod upload;
mod dashboard;
mod pagination;
mod part_detail;
mod history;

pub use header::*;
pub use hero::*;
pub use file_selector::*;
pub use upload_status::*;
pub use upload::*;
pub use dashboard::*;
pub use pagination::*;
pub use part_detail::*;
pub use history::*;
