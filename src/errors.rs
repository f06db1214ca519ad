//! Unified application error type.
//! All modules (db, core, http, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Request validation
    // ---------------------------
    #[error("Invalid badge identifier: {0:?} (exactly 4 digits required)")]
    InvalidIdentifier(String),

    #[error("Unknown employee for badge {0}")]
    UnknownEmployee(String),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Too many pending break requests (limit {0})")]
    StoreBusy(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Employee directory error: {0}")]
    Directory(String),
}

impl AppError {
    /// True for failures of the shared pause document (load, parse, persist).
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::Json(_) | AppError::Storage(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
