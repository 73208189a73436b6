//! Backend services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`api`] - JSON GET endpoints (dashboard stats, parts, upload history)
//! - [`upload`] - multipart archive upload with progress events
//!
//! Every call returns `ApiResult`; nothing here panics on a failed request.

pub mod api;
pub mod upload;

pub use api::*;
pub use upload::*;
