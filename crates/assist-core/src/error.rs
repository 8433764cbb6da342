//! Error types for assist-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssistError {
    #[error("Invalid date format. Expected 'YYYY-MM-DD', got: '{0}'")]
    DateFormat(String),
}

pub type Result<T> = std::result::Result<T, AssistError>;
