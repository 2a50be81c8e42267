use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, ItemDelta};
use crate::domain::shared::value_objects::UserId;

pub struct AddItemsParams {
    pub user_id: UserId,
    pub items: Vec<ItemDelta>,
}

#[async_trait]
pub trait AddItemsUseCase: Send + Sync {
    async fn execute(&self, params: AddItemsParams) -> Result<Cart, CartError>;
}
