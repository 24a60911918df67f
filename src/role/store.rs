use async_trait::async_trait;

use super::types::StoreError;
use crate::config::Configuration;

/// Keyed CRUD persistence.
///
/// Implementations return [`StoreError::NoStoreEntryFound`] from `get` and
/// `update` when the key is absent. Deleting an absent key succeeds.
/// Stores are not chain links.
#[async_trait]
pub trait Store: Send + Sync {
    type Data: Send;

    async fn get(&self, key: &str) -> Result<Self::Data, StoreError>;

    async fn save(&self, data: Self::Data, key: &str) -> Result<(), StoreError>;

    async fn update(&self, data: Self::Data, key: &str) -> Result<(), StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    fn config(&self) -> Option<&Configuration> {
        None
    }
}
