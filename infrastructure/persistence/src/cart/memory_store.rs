use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use business::domain::cart::repository::CartStore;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

/// Process-local cart store. Contents are lost on restart.
#[derive(Default)]
pub struct CartStoreInMemory {
    records: Mutex<HashMap<String, HashMap<String, String>>>,
}

impl CartStoreInMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartStore for CartStoreInMemory {
    async fn read_fields(&self, key: &UserId) -> Result<HashMap<String, String>, RepositoryError> {
        let records = self.records.lock().await;
        Ok(records.get(key.as_str()).cloned().unwrap_or_default())
    }

    async fn write_field(
        &self,
        key: &UserId,
        field: &str,
        value: &str,
    ) -> Result<(), RepositoryError> {
        let mut records = self.records.lock().await;
        records
            .entry(key.as_str().to_string())
            .or_default()
            .insert(field.to_string(), value.to_string());
        Ok(())
    }

    async fn delete_key(&self, key: &UserId) -> Result<(), RepositoryError> {
        self.records.lock().await.remove(key.as_str());
        Ok(())
    }
}
