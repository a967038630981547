//! Common utilities shared across the user manager crates.
//!
//! This crate provides:
//! - Unified error handling for the API and database paths
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, OptionExt};
