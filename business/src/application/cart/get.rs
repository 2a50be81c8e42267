use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::metrics::{CartMetrics, CartOperation};
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartStore;
use crate::domain::cart::snapshot::CartSnapshot;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;

pub struct GetCartUseCaseImpl {
    pub store: Arc<dyn CartStore>,
    pub logger: Arc<dyn Logger>,
    pub metrics: Arc<dyn CartMetrics>,
}

impl GetCartUseCaseImpl {
    async fn get(&self, params: &GetCartParams) -> Result<Cart, CartError> {
        if params.user_id.is_blank() {
            return Err(CartError::UserIdEmpty);
        }

        let snapshot = CartSnapshot::load(self.store.as_ref(), &params.user_id).await?;
        if snapshot.is_absent() {
            return Err(CartError::NotFound);
        }
        Ok(snapshot.into_cart())
    }
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.metrics.record_call(CartOperation::GetCart);
        self.logger
            .info(&format!("Getting cart: {}", params.user_id));

        match self.get(&params).await {
            Ok(cart) => {
                self.logger.info(&format!(
                    "Retrieved cart {} with {} line(s)",
                    params.user_id,
                    cart.items.len()
                ));
                Ok(cart)
            }
            Err(CartError::NotFound) => {
                self.logger
                    .info(&format!("No cart stored for {}", params.user_id));
                Err(CartError::NotFound)
            }
            Err(err) => {
                self.metrics.record_error(CartOperation::GetCart);
                self.logger
                    .error(&format!("Get cart error for {}: {:?}", params.user_id, err));
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::domain::cart::codec::ITEMS_FIELD;
    use crate::domain::cart::model::LineItem;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub Store {}

        #[async_trait]
        impl CartStore for Store {
            async fn read_fields(&self, key: &UserId) -> Result<HashMap<String, String>, RepositoryError>;
            async fn write_field(&self, key: &UserId, field: &str, value: &str) -> Result<(), RepositoryError>;
            async fn delete_key(&self, key: &UserId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    mock! {
        pub Metrics {}

        impl CartMetrics for Metrics {
            fn record_call(&self, operation: CartOperation);
            fn record_error(&self, operation: CartOperation);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn mock_metrics() -> Arc<dyn CartMetrics> {
        let mut metrics = MockMetrics::new();
        metrics.expect_record_call().returning(|_| ());
        metrics.expect_record_error().returning(|_| ());
        Arc::new(metrics)
    }

    fn use_case(store: MockStore) -> GetCartUseCaseImpl {
        GetCartUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
            metrics: mock_metrics(),
        }
    }

    fn params() -> GetCartParams {
        GetCartParams {
            user_id: UserId::new("1"),
        }
    }

    #[tokio::test]
    async fn should_return_not_found_when_key_absent() {
        let mut store = MockStore::new();
        store.expect_read_fields().returning(|_| Ok(HashMap::new()));

        let result = use_case(store).execute(params()).await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_return_empty_cart_when_present_but_empty() {
        let mut store = MockStore::new();
        store
            .expect_read_fields()
            .returning(|_| Ok(HashMap::from([(ITEMS_FIELD.to_string(), "[]".to_string())])));

        let result = use_case(store).execute(params()).await;

        assert_eq!(result.unwrap(), Cart::empty());
    }

    #[tokio::test]
    async fn should_return_stored_items_in_order() {
        let mut store = MockStore::new();
        store.expect_read_fields().returning(|_| {
            Ok(HashMap::from([(
                ITEMS_FIELD.to_string(),
                r#"[{"Sku":"B","Quantity":1},{"Sku":"A","Quantity":3}]"#.to_string(),
            )]))
        });

        let result = use_case(store).execute(params()).await;

        assert_eq!(
            result.unwrap(),
            Cart::new(vec![LineItem::new("B", 1), LineItem::new("A", 3)])
        );
    }

    #[tokio::test]
    async fn should_never_write_on_read() {
        let mut store = MockStore::new();
        store.expect_read_fields().returning(|_| Ok(HashMap::new()));
        store.expect_write_field().never();
        store.expect_delete_key().never();

        let _ = use_case(store).execute(params()).await;
    }

    #[tokio::test]
    async fn should_surface_malformed_items() {
        let mut store = MockStore::new();
        store
            .expect_read_fields()
            .returning(|_| Ok(HashMap::from([(ITEMS_FIELD.to_string(), "{".to_string())])));

        let result = use_case(store).execute(params()).await;

        assert!(matches!(result.unwrap_err(), CartError::MalformedData(_)));
    }

    #[tokio::test]
    async fn should_not_count_not_found_as_error() {
        let mut store = MockStore::new();
        store.expect_read_fields().returning(|_| Ok(HashMap::new()));

        let mut metrics = MockMetrics::new();
        metrics.expect_record_call().times(1).returning(|_| ());
        metrics.expect_record_error().never();

        let use_case = GetCartUseCaseImpl {
            store: Arc::new(store),
            logger: mock_logger(),
            metrics: Arc::new(metrics),
        };

        let result = use_case.execute(params()).await;

        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_surface_store_failure() {
        let mut store = MockStore::new();
        store
            .expect_read_fields()
            .returning(|_| Err(RepositoryError::unavailable("timed out")));

        let result = use_case(store).execute(params()).await;

        assert!(matches!(result.unwrap_err(), CartError::StorageUnavailable(_)));
    }
}
