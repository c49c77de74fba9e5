use std::sync::Arc;

use crate::domain::cart::errors::{CartError, CartOperation};
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::cart::use_cases::get_cart::GetCartUseCase;
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;
use crate::domain::shared::value_objects::ProductId;

/// Single access point to the cart for every consumer.
///
/// Operations never fail to the caller. Failures are logged and turned into a
/// user-facing message on the [`Notifier`]; the cart is left as it was. The
/// message is also handed back so a caller can report it alongside its request.
pub struct CartManager {
    pub get_cart_use_case: Arc<dyn GetCartUseCase>,
    pub add_product_use_case: Arc<dyn AddProductUseCase>,
    pub remove_product_use_case: Arc<dyn RemoveProductUseCase>,
    pub update_product_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

impl CartManager {
    pub async fn cart(&self) -> Cart {
        self.get_cart_use_case.execute().await
    }

    /// Adds one unit of `product_id`. Returns the message sent to the notifier, if any.
    pub async fn add_product(&self, product_id: ProductId) -> Option<&'static str> {
        let result = self
            .add_product_use_case
            .execute(AddProductParams { product_id })
            .await;
        self.settle(CartOperation::AddProduct, product_id, result)
    }

    /// Removes the entry for `product_id`. Returns the message sent to the notifier, if any.
    pub async fn remove_product(&self, product_id: ProductId) -> Option<&'static str> {
        let result = self
            .remove_product_use_case
            .execute(RemoveProductParams { product_id })
            .await;
        self.settle(CartOperation::RemoveProduct, product_id, result)
    }

    /// Sets the amount of an entry. Returns the message sent to the notifier, if any.
    pub async fn update_product_amount(
        &self,
        params: UpdateProductAmountParams,
    ) -> Option<&'static str> {
        let product_id = params.product_id;
        let result = self.update_product_amount_use_case.execute(params).await;
        self.settle(CartOperation::UpdateProductAmount, product_id, result)
    }

    fn settle(
        &self,
        operation: CartOperation,
        product_id: ProductId,
        result: Result<Cart, CartError>,
    ) -> Option<&'static str> {
        let err = result.err()?;

        self.logger.warn(&format!(
            "Cart operation {} on product {} rejected: {}",
            operation, product_id, err
        ));
        let message = err.user_message(operation)?;
        self.notifier.error(message);
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use mockall::mock;

    use crate::application::cart::add_product::AddProductUseCaseImpl;
    use crate::application::cart::get_cart::GetCartUseCaseImpl;
    use crate::application::cart::remove_product::RemoveProductUseCaseImpl;
    use crate::application::cart::session::CartSession;
    use crate::application::cart::update_product_amount::UpdateProductAmountUseCaseImpl;
    use crate::domain::cart::errors::{
        ADD_PRODUCT_FAILED_MESSAGE, REMOVE_PRODUCT_FAILED_MESSAGE, STOCK_EXCEEDED_MESSAGE,
        UPDATE_PRODUCT_AMOUNT_FAILED_MESSAGE,
    };
    use crate::domain::cart::model::{CartProduct, CatalogProduct, Stock};
    use crate::domain::cart::repository::CartRepository;
    use crate::domain::cart::services::{InventoryError, InventoryService};
    use crate::domain::errors::RepositoryError;

    mock! {
        pub Inventory {}

        #[async_trait]
        impl InventoryService for Inventory {
            async fn get_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError>;
            async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, InventoryError>;
        }
    }

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn load(&self) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Notify {}

        impl Notifier for Notify {
            fn error(&self, message: &str);
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

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn product(id: u64, amount: u32) -> CartProduct {
        CartProduct::from_repository(
            ProductId::new(id),
            format!("Tenis {}", id),
            149.9,
            format!("tenis-{}.jpg", id),
            amount,
        )
    }

    fn stock_inventory(stock: u32) -> MockInventory {
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(move |id| Ok(Stock::new(id, stock)));
        inventory.expect_get_product().returning(|id| {
            Ok(CatalogProduct {
                id,
                title: format!("Tenis {}", id),
                price: 149.9,
                image: format!("tenis-{}.jpg", id),
            })
        });
        inventory
    }

    /// Repository that remembers the last saved cart.
    fn recording_repo(saved: Arc<Mutex<Option<Cart>>>) -> MockCartRepo {
        let mut repo = MockCartRepo::new();
        repo.expect_save().returning(move |cart| {
            *saved.lock().unwrap() = Some(cart.clone());
            Ok(())
        });
        repo
    }

    fn silent_notifier() -> MockNotify {
        MockNotify::new()
    }

    fn notifier_expecting(message: &'static str) -> MockNotify {
        let mut notifier = MockNotify::new();
        notifier
            .expect_error()
            .withf(move |m| m == message)
            .times(1)
            .return_const(());
        notifier
    }

    fn manager(
        products: Vec<CartProduct>,
        repo: MockCartRepo,
        inventory: MockInventory,
        notifier: MockNotify,
    ) -> CartManager {
        let logger = mock_logger();
        let session = Arc::new(CartSession::with_cart(
            Cart::from_products(products).unwrap(),
            Arc::new(repo),
            logger.clone(),
        ));
        let inventory: Arc<dyn InventoryService> = Arc::new(inventory);

        CartManager {
            get_cart_use_case: Arc::new(GetCartUseCaseImpl {
                session: session.clone(),
                logger: logger.clone(),
            }),
            add_product_use_case: Arc::new(AddProductUseCaseImpl {
                session: session.clone(),
                inventory: inventory.clone(),
                logger: logger.clone(),
            }),
            remove_product_use_case: Arc::new(RemoveProductUseCaseImpl {
                session: session.clone(),
                logger: logger.clone(),
            }),
            update_product_amount_use_case: Arc::new(UpdateProductAmountUseCaseImpl {
                session,
                inventory,
                logger: logger.clone(),
            }),
            notifier: Arc::new(notifier),
            logger,
        }
    }

    #[tokio::test]
    async fn should_increment_existing_entry_when_stock_allows() {
        let saved = Arc::new(Mutex::new(None));
        let manager = manager(
            vec![product(1, 2)],
            recording_repo(saved.clone()),
            stock_inventory(5),
            silent_notifier(),
        );

        let message = manager.add_product(ProductId::new(1)).await;

        let cart = manager.cart().await;
        assert_eq!(message, None);
        assert_eq!(cart.products(), &[product(1, 3)]);
        assert_eq!(saved.lock().unwrap().as_ref(), Some(&cart));
    }

    #[tokio::test]
    async fn should_add_new_entry_leaving_others_untouched() {
        let saved = Arc::new(Mutex::new(None));
        let manager = manager(
            vec![product(1, 2)],
            recording_repo(saved.clone()),
            stock_inventory(1),
            silent_notifier(),
        );

        manager.add_product(ProductId::new(4)).await;

        let cart = manager.cart().await;
        assert_eq!(cart.products(), &[product(1, 2), product(4, 1)]);
        assert_eq!(saved.lock().unwrap().as_ref(), Some(&cart));
    }

    #[tokio::test]
    async fn should_notify_once_when_adding_out_of_stock_product() {
        let manager = manager(
            vec![],
            MockCartRepo::new(),
            stock_inventory(0),
            notifier_expecting(STOCK_EXCEEDED_MESSAGE),
        );

        let message = manager.add_product(ProductId::new(2)).await;

        assert_eq!(message, Some(STOCK_EXCEEDED_MESSAGE));
        assert!(manager.cart().await.is_empty());
    }

    #[tokio::test]
    async fn should_notify_once_when_increment_exceeds_stock() {
        let manager = manager(
            vec![product(1, 2)],
            MockCartRepo::new(),
            stock_inventory(2),
            notifier_expecting(STOCK_EXCEEDED_MESSAGE),
        );

        manager.add_product(ProductId::new(1)).await;

        assert_eq!(manager.cart().await.products(), &[product(1, 2)]);
    }

    #[tokio::test]
    async fn should_notify_generic_add_error_when_inventory_fails() {
        let mut inventory = MockInventory::new();
        inventory
            .expect_get_stock()
            .returning(|_| Err(InventoryError::Unavailable));

        let manager = manager(
            vec![product(1, 1)],
            MockCartRepo::new(),
            inventory,
            notifier_expecting(ADD_PRODUCT_FAILED_MESSAGE),
        );

        manager.add_product(ProductId::new(3)).await;

        assert_eq!(manager.cart().await.products(), &[product(1, 1)]);
    }

    #[tokio::test]
    async fn should_remove_present_entry_preserving_order() {
        let saved = Arc::new(Mutex::new(None));
        let manager = manager(
            vec![product(1, 1), product(2, 3), product(3, 2)],
            recording_repo(saved.clone()),
            MockInventory::new(),
            silent_notifier(),
        );

        manager.remove_product(ProductId::new(2)).await;

        let cart = manager.cart().await;
        assert_eq!(cart.products(), &[product(1, 1), product(3, 2)]);
        assert_eq!(saved.lock().unwrap().as_ref(), Some(&cart));
    }

    #[tokio::test]
    async fn should_report_removal_error_on_second_remove() {
        let saved = Arc::new(Mutex::new(None));
        let manager = manager(
            vec![product(1, 1)],
            recording_repo(saved),
            MockInventory::new(),
            notifier_expecting(REMOVE_PRODUCT_FAILED_MESSAGE),
        );

        manager.remove_product(ProductId::new(1)).await;
        manager.remove_product(ProductId::new(1)).await;

        assert!(manager.cart().await.is_empty());
    }

    #[tokio::test]
    async fn should_ignore_non_positive_amount_silently() {
        let manager = manager(
            vec![product(1, 2)],
            MockCartRepo::new(),
            MockInventory::new(),
            silent_notifier(),
        );

        for amount in [0, -3] {
            let message = manager
                .update_product_amount(UpdateProductAmountParams {
                    product_id: ProductId::new(1),
                    amount,
                })
                .await;
            assert_eq!(message, None);
        }

        assert_eq!(manager.cart().await.products(), &[product(1, 2)]);
    }

    #[tokio::test]
    async fn should_notify_once_when_update_exceeds_stock() {
        let manager = manager(
            vec![product(1, 2)],
            MockCartRepo::new(),
            stock_inventory(3),
            notifier_expecting(STOCK_EXCEEDED_MESSAGE),
        );

        manager
            .update_product_amount(UpdateProductAmountParams {
                product_id: ProductId::new(1),
                amount: 4,
            })
            .await;

        assert_eq!(manager.cart().await.products(), &[product(1, 2)]);
    }

    #[tokio::test]
    async fn should_set_exact_amount_and_persist() {
        let saved = Arc::new(Mutex::new(None));
        let manager = manager(
            vec![product(1, 2), product(2, 1)],
            recording_repo(saved.clone()),
            stock_inventory(3),
            silent_notifier(),
        );

        manager
            .update_product_amount(UpdateProductAmountParams {
                product_id: ProductId::new(1),
                amount: 3,
            })
            .await;

        let cart = manager.cart().await;
        assert_eq!(cart.products(), &[product(1, 3), product(2, 1)]);
        assert_eq!(saved.lock().unwrap().as_ref(), Some(&cart));
    }

    #[tokio::test]
    async fn should_notify_generic_update_error_when_product_absent() {
        let manager = manager(
            vec![product(1, 2)],
            MockCartRepo::new(),
            stock_inventory(10),
            notifier_expecting(UPDATE_PRODUCT_AMOUNT_FAILED_MESSAGE),
        );

        manager
            .update_product_amount(UpdateProductAmountParams {
                product_id: ProductId::new(5),
                amount: 1,
            })
            .await;

        assert_eq!(manager.cart().await.products(), &[product(1, 2)]);
    }

    #[tokio::test]
    async fn should_keep_change_without_notifying_when_store_write_fails() {
        let mut repo = MockCartRepo::new();
        repo.expect_save()
            .times(1)
            .returning(|_| Err(RepositoryError::DatabaseError));

        let manager = manager(
            vec![product(1, 2)],
            repo,
            stock_inventory(5),
            silent_notifier(),
        );

        let message = manager.add_product(ProductId::new(1)).await;

        assert_eq!(message, None);
        assert_eq!(manager.cart().await.products(), &[product(1, 3)]);
    }

    #[tokio::test]
    async fn should_not_lose_updates_on_concurrent_adds() {
        let saved = Arc::new(Mutex::new(None));
        let manager = Arc::new(manager(
            vec![],
            recording_repo(saved.clone()),
            stock_inventory(5),
            silent_notifier(),
        ));

        let first = tokio::spawn({
            let manager = manager.clone();
            async move { manager.add_product(ProductId::new(1)).await }
        });
        let second = tokio::spawn({
            let manager = manager.clone();
            async move { manager.add_product(ProductId::new(1)).await }
        });
        first.await.unwrap();
        second.await.unwrap();

        let cart = manager.cart().await;
        assert_eq!(cart.products(), &[product(1, 2)]);
        assert_eq!(saved.lock().unwrap().as_ref(), Some(&cart));
    }

    #[tokio::test]
    async fn should_merge_concurrent_changes_on_different_products() {
        let manager = Arc::new(manager(
            vec![product(1, 1)],
            recording_repo(Arc::new(Mutex::new(None))),
            stock_inventory(5),
            silent_notifier(),
        ));

        tokio::join!(
            manager.add_product(ProductId::new(2)),
            manager.add_product(ProductId::new(1)),
            manager.add_product(ProductId::new(3)),
        );

        let cart = manager.cart().await;
        assert_eq!(cart.len(), 3);
        assert_eq!(cart.find(ProductId::new(1)).unwrap().amount, 2);
        assert_eq!(cart.total_units(), 4);
    }
}
