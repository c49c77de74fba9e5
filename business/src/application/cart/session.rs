use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard, RwLock};

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartChange};
use crate::domain::cart::repository::CartRepository;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::ProductId;

/// Authoritative in-memory cart plus its persistence slot.
///
/// Operations on the same product are serialized through [`CartSession::lock_product`].
/// Changes are merged into the latest state under the write lock, published, then
/// written to the store. A failed write is logged and does not undo the change.
pub struct CartSession {
    cart: RwLock<Cart>,
    /// One lock per product with an operation in flight; idle entries are pruned.
    product_locks: Mutex<HashMap<ProductId, Arc<Mutex<()>>>>,
    repository: Arc<dyn CartRepository>,
    logger: Arc<dyn Logger>,
}

impl CartSession {
    /// Loads the stored cart once. Missing or unreadable content yields an empty cart.
    pub async fn restore(repository: Arc<dyn CartRepository>, logger: Arc<dyn Logger>) -> Self {
        let cart = match repository.load().await {
            Ok(Some(cart)) => {
                logger.info(&format!("Cart restored with {} products", cart.len()));
                cart
            }
            Ok(None) => {
                logger.info("No stored cart found, starting with an empty cart");
                Cart::new()
            }
            Err(err) => {
                logger.warn(&format!(
                    "Stored cart could not be read ({}), starting with an empty cart",
                    err
                ));
                Cart::new()
            }
        };

        Self::with_cart(cart, repository, logger)
    }

    pub fn with_cart(
        cart: Cart,
        repository: Arc<dyn CartRepository>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            cart: RwLock::new(cart),
            product_locks: Mutex::new(HashMap::new()),
            repository,
            logger,
        }
    }

    pub async fn snapshot(&self) -> Cart {
        self.cart.read().await.clone()
    }

    /// Waits until no other operation holds `product_id`.
    pub async fn lock_product(&self, product_id: ProductId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.product_locks.lock().await;
            // Only the table holds an idle lock; guards and waiters own a clone.
            locks.retain(|_, lock| Arc::strong_count(lock) > 1);
            locks.entry(product_id).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Applies `change` to the latest cart, publishes it, then writes it to the store.
    ///
    /// The store write is fire-and-forget: a failure is logged only. The write
    /// lock is held until the write returns so store writes keep commit order.
    pub async fn commit(&self, change: CartChange) -> Result<Cart, CartError> {
        let product_id = change.product_id();
        let mut current = self.cart.write().await;

        let mut working = current.clone();
        working.apply(change)?;
        *current = working.clone();

        if let Err(err) = self.repository.save(&working).await {
            self.logger.error(&format!(
                "Cart could not be persisted after change on product {}: {}",
                product_id, err
            ));
        }

        self.logger.debug(&format!(
            "Cart committed after change on product {} ({} products)",
            product_id,
            working.len()
        ));
        Ok(working)
    }
}
