use std::sync::Arc;

use inventory::client::InventoryClient;
use inventory::service::InventoryServiceHttp;
use logger::TracingLogger;
use notification::QueuedNotifier;
use persistence::cart::repository::CartRepositoryKeyValue;
use persistence::key_value::store::SqliteKeyValueStore;

use business::application::cart::add_product::AddProductUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::manager::CartManager;
use business::application::cart::remove_product::RemoveProductUseCaseImpl;
use business::application::cart::session::CartSession;
use business::application::cart::update_product_amount::UpdateProductAmountUseCaseImpl;
use business::domain::logger::Logger;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub cart_api: crate::api::cart::routes::CartApi,
    pub notification_api: crate::api::notification::routes::NotificationApi,
}

impl DependencyContainer {
    pub async fn new(pool: sqlx::SqlitePool, config: &AppConfig) -> anyhow::Result<Self> {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger::new("cart"));
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let cart_repository = Arc::new(CartRepositoryKeyValue::new(
            SqliteKeyValueStore::new(pool),
            config.cart.storage_key.clone(),
        ));
        let inventory = Arc::new(InventoryServiceHttp::new(InventoryClient::new(
            config.inventory.base_url.clone(),
            config.inventory.timeout,
        )?));
        let notifications = Arc::new(QueuedNotifier::new(config.cart.notification_capacity));

        // Cart state, loaded once
        let session = Arc::new(CartSession::restore(cart_repository, logger.clone()).await);

        // Cart use cases
        let get_cart_use_case = Arc::new(GetCartUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let add_product_use_case = Arc::new(AddProductUseCaseImpl {
            session: session.clone(),
            inventory: inventory.clone(),
            logger: logger.clone(),
        });
        let remove_product_use_case = Arc::new(RemoveProductUseCaseImpl {
            session: session.clone(),
            logger: logger.clone(),
        });
        let update_product_amount_use_case = Arc::new(UpdateProductAmountUseCaseImpl {
            session,
            inventory,
            logger: logger.clone(),
        });

        let manager = Arc::new(CartManager {
            get_cart_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_product_amount_use_case,
            notifier: notifications.clone(),
            logger,
        });

        let cart_api = crate::api::cart::routes::CartApi::new(manager);
        let notification_api =
            crate::api::notification::routes::NotificationApi::new(notifications);

        Ok(Self {
            health_api,
            cart_api,
            notification_api,
        })
    }
}
