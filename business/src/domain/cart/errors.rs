#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.user_id_empty")]
    UserIdEmpty,
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.malformed_data")]
    MalformedData(String),
    #[error("cart.storage_unavailable")]
    StorageUnavailable(#[from] crate::domain::errors::RepositoryError),
}
