use std::sync::Arc;

use logger::TracingLogger;
use metrics::AtomicCartMetrics;

use business::application::cart::add_items::AddItemsUseCaseImpl;
use business::application::cart::delete::DeleteCartUseCaseImpl;
use business::application::cart::get::GetCartUseCaseImpl;
use business::application::cart::remove_items::RemoveItemsUseCaseImpl;
use business::domain::cart::locks::CartLocks;
use business::domain::cart::repository::CartStore;

use crate::config::cart_config::CartConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub metrics_api: crate::api::metrics::routes::MetricsApi,
}

impl DependencyContainer {
    pub fn new(store: Arc<dyn CartStore>, config: &CartConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let metrics = Arc::new(AtomicCartMetrics::new());
        let health_api = crate::api::health::routes::Api::new();

        let locks = config.serialize_mutations.then(|| Arc::new(CartLocks::new()));
        if locks.is_some() {
            tracing::info!("per-user cart mutation locking enabled");
        }

        // Cart use cases
        let get_use_case = Arc::new(GetCartUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
            metrics: metrics.clone(),
        });
        let add_items_use_case = Arc::new(AddItemsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
            metrics: metrics.clone(),
            locks: locks.clone(),
        });
        let remove_items_use_case = Arc::new(RemoveItemsUseCaseImpl {
            store: store.clone(),
            logger: logger.clone(),
            metrics: metrics.clone(),
            locks,
        });
        let delete_use_case = Arc::new(DeleteCartUseCaseImpl {
            store,
            logger,
            metrics: metrics.clone(),
        });

        let cart_api = crate::api::cart::routes::CartApi::new(
            get_use_case,
            add_items_use_case,
            remove_items_use_case,
            delete_use_case,
        );
        let metrics_api = crate::api::metrics::routes::MetricsApi::new(metrics);

        Self {
            health_api,
            cart_api,
            metrics_api,
        }
    }
}
