use thiserror::Error;

/// Failure taxonomy shared by the engine, the persistence semantics, and
/// the web sync layer. The HTTP layer maps 404/409/401 onto the first
/// three variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board not found")]
    NotFound,
    #[error("board name already taken")]
    Conflict,
    #[error("incorrect board password")]
    Unauthorized,
    #[error("hiscores lookup failed or the account is unranked")]
    InvalidExternalAccount,
    #[error("invalid board: {0}")]
    Validation(String),
    #[error("upstream service unavailable: {0}")]
    Upstream(String),
}

impl BoardError {
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        BoardError::Validation(message.into())
    }

    #[must_use]
    pub fn upstream(message: impl Into<String>) -> Self {
        BoardError::Upstream(message.into())
    }
}
