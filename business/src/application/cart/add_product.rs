use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::CartSession;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartChange, CartProduct};
use crate::domain::cart::services::InventoryService;
use crate::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use crate::domain::logger::Logger;

pub struct AddProductUseCaseImpl {
    pub session: Arc<CartSession>,
    pub inventory: Arc<dyn InventoryService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddProductUseCase for AddProductUseCaseImpl {
    async fn execute(&self, params: AddProductParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;
        self.logger
            .info(&format!("Adding product to cart: {}", product_id));

        let _guard = self.session.lock_product(product_id).await;
        let current_amount = self
            .session
            .snapshot()
            .await
            .find(product_id)
            .map(|p| p.amount);
        let requested = current_amount.map_or(1, |amount| u64::from(amount) + 1);

        let stock = self.inventory.get_stock(product_id).await?;
        let amount = stock.ensure_covers(requested)?;

        let change = match current_amount {
            Some(_) => CartChange::SetAmount { product_id, amount },
            None => {
                let product = self.inventory.get_product(product_id).await?;
                CartChange::Append(CartProduct::from_catalog(product))
            }
        };

        let cart = self.session.commit(change).await?;

        self.logger.info(&format!(
            "Product {} added to cart, amount now {}",
            product_id, amount
        ));
        Ok(cart)
    }
}
