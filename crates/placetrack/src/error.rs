//! Error types for placetrack.
//!
//! This module defines all error types used throughout the placetrack crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

use crate::record::RecordId;
use crate::session::Page;

/// The main error type for placetrack operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Storage Errors ===
    /// Failed to open or create the database.
    #[error("failed to open database at {path}: {source}")]
    DatabaseOpen {
        /// Path to the database file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: rusqlite::Error,
    },

    /// A database query failed.
    #[error("database query failed: {0}")]
    DatabaseQuery(#[from] rusqlite::Error),

    // === Record Errors ===
    /// The stored record collection could not be parsed.
    #[error("stored records under key '{key}' are malformed: {source}")]
    CorruptRecords {
        /// Storage key holding the collection.
        key: String,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// No record carries the given identifier.
    #[error("no placement record with id {id}")]
    RecordNotFound {
        /// The identifier that was looked up.
        id: RecordId,
    },

    // === Form Errors ===
    /// A required form field was left blank.
    #[error("{field} is required")]
    MissingField {
        /// Display name of the field.
        field: &'static str,
    },

    /// The package field is not a number.
    #[error("package must be a number, got '{value}'")]
    InvalidPackage {
        /// The rejected input.
        value: String,
    },

    /// The date field is not a calendar date.
    #[error("date placed must be YYYY-MM-DD, got '{value}'")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// Submit or cancel was requested with no form open.
    #[error("no placement form is open")]
    NoOpenForm,

    // === Session Errors ===
    /// The requested page is not reachable from the current one.
    #[error("cannot navigate from {from} to {to}")]
    InvalidTransition {
        /// Page the shell was on.
        from: Page,
        /// Page that was requested.
        to: Page,
    },

    /// A dashboard was requested with nobody logged in.
    #[error("not logged in")]
    NotLoggedIn,

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === I/O Errors ===
    /// Failed to create a required directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryCreate {
        /// Path that couldn't be created.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for placetrack operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a missing-field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Check if this error was caused by user input on the placement form.
    #[must_use]
    pub fn is_form_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::InvalidPackage { .. } | Self::InvalidDate { .. }
        )
    }

    /// Check if this error means the stored data could not be read.
    #[must_use]
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::CorruptRecords { .. })
    }
}
