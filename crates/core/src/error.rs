//! Error types for the Shelfwatch domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! The narrative boundary has its own error enum so the report pipeline can
//! recover from it without inspecting message strings: a `NarrativeError`
//! never aborts report generation, everything else in `Error` does.

use std::path::PathBuf;
use thiserror::Error;

/// The top-level error type for all Shelfwatch operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The inventory input file does not exist.
    #[error("Inventory file not found: {path}")]
    NotFound { path: PathBuf },

    /// A required column is missing or a value failed to parse.
    ///
    /// `line` is the 1-based line number in the input file, counting the
    /// header as line 1.
    #[error("Invalid inventory data at line {line}: {message}")]
    DataFormat { line: usize, message: String },

    // --- Narrative boundary errors ---
    #[error("Narrative error: {0}")]
    Narrative(#[from] NarrativeError),

    // --- Access boundary errors ---
    #[error("Access error: {0}")]
    Access(#[from] AccessError),

    // --- Configuration errors ---
    #[error("Configuration error: {message}")]
    Config { message: String },

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // --- I/O (report and slice output) ---
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // --- Generic ---
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Boundary errors ---

/// Errors from the narrative (text-generation) service boundary.
///
/// Every variant means the same thing to the report pipeline: the upstream
/// service is unavailable and the narrative section is skipped.
#[derive(Debug, Clone, Error)]
pub enum NarrativeError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Provider returned an empty narrative")]
    EmptyResponse,
}

/// Errors from the access-control boundary.
#[derive(Debug, Clone, Error)]
pub enum AccessError {
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    #[error("Invalid credentials for user: {0}")]
    InvalidCredentials(String),
}
