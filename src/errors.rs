//! Unified application error type.
//! Every stage of the conversion (loader, config, writers, cli) returns
//! AppError so fatal failures surface the same way to the caller.
//! Per-row data problems are not errors: see `models::outcome`.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Input tables
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Malformed table: {0}")]
    MalformedTable(String),

    #[error("Unsupported input file: {0}")]
    UnsupportedInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid time zone: {0}")]
    InvalidTimeZone(String),

    #[error("Invalid column letter: {0}")]
    InvalidColumn(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output file already exists: {0}")]
    OutputExists(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
