//! Error Types
//!
//! This module defines the error types used throughout the viewer.
//!
//! # Overview
//!
//! The main error type [`StrideError`] covers:
//! - Asset loading and decoding errors
//! - Catalog and key-binding lookups
//! - Configuration parsing
//!
//! None of these are fatal to a running viewer. Loaders report them per
//! asset and the frame loop keeps going with whatever has loaded.
//!
//! ```rust,ignore
//! use stride_core::errors::{Result, StrideError};
//!
//! fn find_clip(name: &str) -> Result<ClipId> {
//!     name.parse().map_err(|_| StrideError::UnknownClip(name.to_string()))
//! }
//! ```

use thiserror::Error;

/// The main error type for the Stride viewer.
#[derive(Error, Debug)]
pub enum StrideError {
    // ========================================================================
    // Asset Loading Errors
    // ========================================================================
    /// The requested asset was not found.
    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    /// An asset was found but could not be loaded or parsed.
    #[error("Failed to load asset '{asset}': {reason}")]
    AssetLoad {
        /// Catalog name of the asset
        asset: String,
        /// Loader-provided description of the failure
        reason: String,
    },

    /// The asset loaded but carried no animation clips.
    #[error("No animations found for asset: {0}")]
    NoAnimations(String),

    // ========================================================================
    // Lookup Errors
    // ========================================================================
    /// A clip name that is not part of the catalog.
    #[error("Unknown clip: {0}")]
    UnknownClip(String),

    /// A key name that does not map to any [`Key`](crate::input::Key).
    #[error("Unknown key name: {0:?}")]
    UnknownKey(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Semantically invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ========================================================================
    // I/O & Format Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// HTTP response error with status code.
    #[error("HTTP response error: status {status}")]
    HttpResponse {
        /// HTTP status code
        status: u16,
    },

    // ========================================================================
    // Async Errors
    // ========================================================================
    /// A load task was dropped before producing a result.
    #[error("Task join error: {0}")]
    TaskJoin(String),
}

/// Alias for `Result<T, StrideError>`.
pub type Result<T> = std::result::Result<T, StrideError>;
