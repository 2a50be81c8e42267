use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::codec::{self, ITEMS_FIELD};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::locks::CartLocks;
use crate::domain::cart::metrics::{CartMetrics, CartOperation};
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::cart::use_cases::remove_items::{RemoveItemsParams, RemoveItemsUseCase};
use crate::domain::logger::Logger;

pub struct RemoveItemsUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
    pub metrics: Arc<dyn CartMetrics>,
    pub locks: Option<Arc<CartLocks>>,
}

impl RemoveItemsUseCaseImpl {
    async fn remove(&self, params: RemoveItemsParams) -> Result<Cart, CartError> {
        if params.user_id.is_blank() {
            return Err(CartError::UserIdEmpty);
        }

        let _guard = match &self.locks {
            Some(locks) => Some(locks.acquire(&params.user_id).await),
            None => None,
        };

        // Removing from a cart that was never stored leaves it absent.
        let snapshot = CartSnapshot::load(self.store.as_ref(), &params.user_id).await?;
        if snapshot.is_absent() {
            return Ok(Cart::empty());
        }

        let mut cart = snapshot.into_cart();
        cart.subtract(&params.items, params.remove_all);

        // An emptied cart is written as `[]` so the key survives until deleted.
        let encoded = codec::encode(&cart.items)?;
        self.store
            .write_field(&params.user_id, ITEMS_FIELD, &encoded)
            .await?;

        Ok(cart)
    }
}

#[async_trait]
impl RemoveItemsUseCase for RemoveItemsUseCaseImpl {
    async fn execute(&self, params: RemoveItemsParams) -> Result<Cart, CartError> {
        self.metrics.record_call(CartOperation::RemoveItems);
        self.logger.info(&format!(
            "Removing {} item(s) from cart: {} (remove_all: {})",
            params.items.len(),
            params.user_id,
            params.remove_all
        ));

        let user_id = params.user_id.clone();
        match self.remove(params).await {
            Ok(cart) => {
                if cart.is_empty() {
                    self.logger.debug(&format!("Cart {} is now empty", user_id));
                }
                Ok(cart)
            }
            Err(err) => {
                self.metrics.record_error(CartOperation::RemoveItems);
                self.logger
                    .error(&format!("Failed to remove items from cart {}: {:?}", user_id, err));
                Err(err)
            }
        }
    }
}
