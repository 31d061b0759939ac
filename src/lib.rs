//! # Greenfield
//!
//! Shared contract layer for the greenfield full-stack starter.
//!
//! The starter is split into a handful of crates that all meet at this one:
//! the API server (`greenfield-server`) wraps its payloads in the
//! [`ApiResponse`] envelope, the page server (`greenfield-web`) renders with
//! the shared [`utils`], and both agree on the [`types`] that cross the wire.
//!
//! ## Features
//!
//! - **Response envelope**: [`ApiResponse`] is a two-variant sum type, so a
//!   response can never carry both a payload and an error
//! - **Shared utilities**: [`format_date`], [`is_valid_email`] and [`sleep`]
//! - **Shared types**: [`User`] and the [`Environment`] discriminator
//!
//! ## Quick Start
//!
//! ```
//! use greenfield::{ApiResponse, format_date, is_valid_email};
//! use chrono::Utc;
//!
//! let today = format_date(&Utc::now());
//! assert_eq!(today.len(), 10);
//!
//! assert!(is_valid_email("test@example.com"));
//!
//! let response = ApiResponse::success(today);
//! assert!(response.is_success());
//! ```

pub mod common;
pub mod error;
pub mod types;
pub mod utils;

// Re-export core types
pub use common::ApiResponse;
pub use error::{GreenfieldError, Result};
pub use types::{Environment, User};
pub use utils::{format_date, is_valid_email, sleep};

/// Prelude module for convenient imports
///
/// ```
/// use greenfield::prelude::*;
/// ```
pub mod prelude {
    pub use crate::common::ApiResponse;
    pub use crate::error::{GreenfieldError, Result};
    pub use crate::types::{Environment, User};
    pub use crate::utils::{format_date, is_valid_email, sleep};
}
