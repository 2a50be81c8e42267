use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::metrics::{CartMetrics, CartOperation};
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::use_cases::delete::{DeleteCartParams, DeleteCartUseCase};
use crate::domain::logger::Logger;

pub struct DeleteCartUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
    pub metrics: Arc<dyn CartMetrics>,
}

#[async_trait]
impl DeleteCartUseCase for DeleteCartUseCaseImpl {
    async fn execute(&self, params: DeleteCartParams) -> Result<(), CartError> {
        self.metrics.record_call(CartOperation::DeleteCart);
        self.logger
            .info(&format!("Deleting cart: {}", params.user_id));

        if params.user_id.is_blank() {
            self.metrics.record_error(CartOperation::DeleteCart);
            return Err(CartError::UserIdEmpty);
        }

        if let Err(err) = self.store.delete_key(&params.user_id).await {
            self.metrics.record_error(CartOperation::DeleteCart);
            self.logger
                .error(&format!("Failed to delete cart {}: {:?}", params.user_id, err));
            return Err(err.into());
        }

        self.logger
            .info(&format!("Cart deleted: {}", params.user_id));
        Ok(())
    }
}
