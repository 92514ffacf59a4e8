//! Error types for zoo-manager.
//!
//! Errors fall into three groups that callers treat differently: validation
//! errors (bad form input), selection errors (nothing chosen to act on), and
//! persistence errors (the database could not be reached or read). The rest
//! cover configuration, I/O and the desktop window.

use std::path::PathBuf;
use thiserror::Error;

use crate::controller::Field;

/// The main error type for zoo-manager operations.
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

    /// A write reached the store but the list could not be re-read afterwards.
    #[error("animal {id} was {action}, but the list could not be reloaded: {source}")]
    Reload {
        /// What happened to the record ("added" or "deleted").
        action: &'static str,
        /// Identifier of the record that was written.
        id: i64,
        /// Why the reload failed.
        #[source]
        source: Box<Error>,
    },

    // === Validation Errors ===
    /// A required form field was left empty.
    #[error("{field} must be filled in")]
    MissingField {
        /// The field that was empty.
        field: Field,
    },

    /// The date of birth did not match the day-month-year format.
    #[error("invalid date of birth '{value}': expected DD-MM-YYYY")]
    InvalidDate {
        /// The text that failed to parse.
        value: String,
    },

    /// A measurement field was not a finite number.
    #[error("invalid {field} '{value}': expected a number")]
    InvalidNumber {
        /// The field holding the bad value.
        field: Field,
        /// The text that failed to parse.
        value: String,
    },

    // === Selection Errors ===
    /// Delete was requested with no row selected.
    #[error("please select an animal to delete")]
    NoSelection,

    /// A row index outside the displayed list was selected.
    #[error("no row at position {index}")]
    UnknownRow {
        /// The requested row index.
        index: usize,
    },

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
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

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
    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Interface Errors ===
    /// The desktop window could not be started.
    #[error("window error: {0}")]
    Gui(String),
}

/// A specialized Result type for zoo-manager operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new window error.
    #[must_use]
    pub fn gui(message: impl Into<String>) -> Self {
        Self::Gui(message.into())
    }

    /// Check if this error came from rejected form input.
    #[must_use]
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField { .. } | Self::InvalidDate { .. } | Self::InvalidNumber { .. }
        )
    }

    /// Check if this error means there was nothing selected to act on.
    #[must_use]
    pub fn is_selection_error(&self) -> bool {
        matches!(self, Self::NoSelection | Self::UnknownRow { .. })
    }

    /// Check if this error came from the database or the file holding it.
    #[must_use]
    pub fn is_persistence_error(&self) -> bool {
        matches!(
            self,
            Self::DatabaseOpen { .. }
                | Self::DatabaseQuery(_)
                | Self::Reload { .. }
                | Self::DirectoryCreate { .. }
        )
    }
}
