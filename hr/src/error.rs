use thiserror::Error;

/// Shared result type for roster operations.
pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error)]
pub enum HrError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("store error: {0}")]
    Store(#[from] sea_orm::DbErr),
}

impl HrError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
