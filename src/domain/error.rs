//! Error types for the cinetrack library.
//!
//! This module defines the centralized error type [`CinetrackError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Failures on the catalog fetch path have their own taxonomy
//! ([`crate::fetch::FetchError`]) because they are classified rather than
//! propagated: a cancelled lookup is silently dropped, everything else becomes
//! a user-visible message. The variants here cover the fallible operations
//! that do propagate with `?`.

use thiserror::Error;

/// The main error type for cinetrack operations.
///
/// This enum consolidates the error conditions that can occur outside the
/// fetch path: storage reads and writes, filesystem I/O, and configuration
/// loading. Most variants wrap underlying errors from external crates using
/// `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum CinetrackError {
    /// Storage operation failed.
    ///
    /// Occurs when writing the watched collection to the storage backend fails.
    /// The string contains a description of what went wrong.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when the configuration file cannot be parsed or required values
    /// are malformed. The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for cinetrack operations.
///
/// This is a type alias for `std::result::Result<T, CinetrackError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, CinetrackError>;
