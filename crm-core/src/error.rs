use thiserror::Error;

use crate::client::{ClientField, ClientId};

/// Input that fails the directory's precondition checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field '{0}' is empty")]
    MissingField(ClientField),
}

impl ValidationError {
    pub fn field(&self) -> ClientField {
        match self {
            ValidationError::MissingField(field) => *field,
        }
    }
}

/// Errors returned by directory operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("client not found: {0}")]
    NotFound(ClientId),
    #[error("client form is not open")]
    FormClosed,
    #[error("duplicate client id: {0}")]
    DuplicateId(ClientId),
    #[error("no client ids left to allocate")]
    IdsExhausted,
}

impl DirectoryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound(_))
    }
}
