use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

/// Key-value backend holding one field map per user.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Returns every field stored under the key; an absent key yields an empty map.
    async fn read_fields(&self, key: &UserId) -> Result<HashMap<String, String>, RepositoryError>;
    async fn write_field(
        &self,
        key: &UserId,
        field: &str,
        value: &str,
    ) -> Result<(), RepositoryError>;
    /// Removing a missing key succeeds.
    async fn delete_key(&self, key: &UserId) -> Result<(), RepositoryError>;
}
