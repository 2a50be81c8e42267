/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The backing store could not complete the call. Carries the backend message as-is.
    #[error("repository.unavailable")]
    Unavailable(String),
}

impl RepositoryError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        RepositoryError::Unavailable(reason.into())
    }

    pub fn reason(&self) -> &str {
        match self {
            RepositoryError::Unavailable(reason) => reason,
        }
    }
}
