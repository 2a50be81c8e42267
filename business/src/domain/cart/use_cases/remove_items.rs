use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, ItemDelta};
use crate::domain::shared::value_objects::UserId;

pub struct RemoveItemsParams {
    pub user_id: UserId,
    pub items: Vec<ItemDelta>,
    /// Drop the whole line for every listed SKU, ignoring the requested quantity.
    pub remove_all: bool,
}

#[async_trait]
pub trait RemoveItemsUseCase: Send + Sync {
    async fn execute(&self, params: RemoveItemsParams) -> Result<Cart, CartError>;
}
