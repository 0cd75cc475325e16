//! Unified error types for the filament tracker.
//!
//! All fallible operations return [`Result`], which wraps the single [`Error`]
//! enum. Database errors convert automatically from `sea_orm::DbErr`;
//! domain-level failures use dedicated variants so callers can match on them.

use thiserror::Error;

/// Unified error type for all spooltrack operations
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Description of what went wrong
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Required environment variable missing or malformed
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// Referenced vendor does not exist
    #[error("Vendor not found: {name}")]
    VendorNotFound {
        /// Vendor name or id used for the lookup
        name: String,
    },

    /// Referenced filament does not exist
    #[error("Filament not found: {name}")]
    FilamentNotFound {
        /// Filament name or id used for the lookup
        name: String,
    },

    /// Referenced purchase does not exist
    #[error("Purchase not found: {id}")]
    PurchaseNotFound {
        /// Purchase id used for the lookup
        id: i64,
    },

    /// Referenced spool does not exist
    #[error("Spool not found: {id}")]
    SpoolNotFound {
        /// Spool id used for the lookup
        id: i64,
    },

    /// A vendor or filament with this name already exists
    #[error("Duplicate name: {name}")]
    DuplicateName {
        /// The conflicting name
        name: String,
    },

    /// Weight was negative, NaN, or infinite
    #[error("Invalid weight: {kg} kg")]
    InvalidWeight {
        /// The rejected weight value
        kg: f64,
    },

    /// Spool count on a purchase item must be positive
    #[error("Invalid spool count: {count}")]
    InvalidSpoolCount {
        /// The rejected count
        count: i32,
    },

    /// Price was negative, NaN, or infinite
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The rejected price value
        price: f64,
    },

    /// Attempted to modify a spool that has already been finished
    #[error("Spool {id} is already finished")]
    SpoolAlreadyFinished {
        /// Id of the finished spool
        id: i64,
    },
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
