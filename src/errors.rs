//! Unified application error type.
//! Engine, backend, db and cli modules all return AppError so that the
//! CLI host can report every failure the same way.

use crate::models::write_off::TaskId;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid hours: {0}")]
    InvalidHours(i64),

    #[error("Invalid write-off strategy: {0}")]
    InvalidStrategy(String),

    // ---------------------------
    // Engine errors
    // ---------------------------
    #[error("Invalid write-off record: {0}")]
    InvalidRecord(String),

    #[error("Task {0} not found")]
    UnknownTask(TaskId),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("No task selected to charge time against")]
    NoTaskSelected,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
