use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::codec::{self, ITEMS_FIELD};
use crate::domain::cart::errors::CartError;
use crate::domain::cart::locks::CartLocks;
use crate::domain::cart::metrics::{CartMetrics, CartOperation};
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::cart::use_cases::add_items::{AddItemsParams, AddItemsUseCase};
use crate::domain::logger::Logger;

pub struct AddItemsUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
    pub metrics: Arc<dyn CartMetrics>,
    /// When set, concurrent mutations of one cart in this process run one at a time.
    pub locks: Option<Arc<CartLocks>>,
}

impl AddItemsUseCaseImpl {
    async fn add(&self, params: AddItemsParams) -> Result<Cart, CartError> {
        if params.user_id.is_blank() {
            return Err(CartError::UserIdEmpty);
        }

        let _guard = match &self.locks {
            Some(locks) => Some(locks.acquire(&params.user_id).await),
            None => None,
        };

        // Absent carts start empty; the first write creates the record.
        let mut cart = CartSnapshot::load(self.store.as_ref(), &params.user_id)
            .await?
            .into_cart();
        cart.merge(&params.items);

        let encoded = codec::encode(&cart.items)?;
        self.store
            .write_field(&params.user_id, ITEMS_FIELD, &encoded)
            .await?;

        Ok(cart)
    }
}

#[async_trait]
impl AddItemsUseCase for AddItemsUseCaseImpl {
    async fn execute(&self, params: AddItemsParams) -> Result<Cart, CartError> {
        self.metrics.record_call(CartOperation::AddItems);
        self.logger.info(&format!(
            "Adding {} item(s) to cart: {}",
            params.items.len(),
            params.user_id
        ));

        let user_id = params.user_id.clone();
        match self.add(params).await {
            Ok(cart) => {
                self.logger.info(&format!(
                    "Cart {} now holds {} line(s)",
                    user_id,
                    cart.items.len()
                ));
                Ok(cart)
            }
            Err(err) => {
                self.metrics.record_error(CartOperation::AddItems);
                self.logger
                    .error(&format!("Failed to add items in cart {}: {:?}", user_id, err));
                Err(err)
            }
        }
    }
}
