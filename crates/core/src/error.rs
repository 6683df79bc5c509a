//! Error types for the makan canteen search library.

use thiserror::Error;

/// Primary error type for dataset loading and search operations.
#[derive(Error, Debug)]
pub enum MakanError {
    #[error("malformed location for canteen {canteen}: {detail}")]
    DataFormat { canteen: String, detail: String },

    #[error("unknown canteen: {0}")]
    UnknownCanteen(String),

    #[error("user location not captured")]
    IncompleteInput,

    #[error("invalid maximum price: {0}")]
    InvalidPrice(String),

    #[error("invalid viewport dimensions: {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience Result type alias for MakanError.
pub type Result<T> = std::result::Result<T, MakanError>;
