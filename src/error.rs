//! Error types for the LibraNet desk

use thiserror::Error;

use crate::models::item::{ItemId, MediaType};

/// Desk error codes shown to the operator next to each message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    AlreadyAvailable = 8,
    WrongVariant = 12,
    BadValue = 18,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("Item id {id} is not available for borrowing (borrowed by {borrower})")]
    ItemNotAvailable { id: ItemId, borrower: String },

    #[error("Item id {0} is already available, no need to return")]
    AlreadyAvailable(ItemId),

    #[error("Item id {id} is a {actual}, expected {expected}")]
    WrongVariant {
        id: ItemId,
        expected: MediaType,
        actual: MediaType,
    },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ItemNotFound(_) => ErrorCode::NoSuchItem,
            AppError::ItemNotAvailable { .. } => ErrorCode::ItemNotAvailable,
            AppError::AlreadyAvailable(_) => ErrorCode::AlreadyAvailable,
            AppError::WrongVariant { .. } => ErrorCode::WrongVariant,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Config(_) | AppError::Io(_) => ErrorCode::Failure,
        }
    }

    /// Informational outcomes are reported to the operator but are not failures
    pub fn is_informational(&self) -> bool {
        matches!(self, AppError::AlreadyAvailable(_))
    }
}

/// Result type alias for desk operations
pub type AppResult<T> = Result<T, AppError>;
