use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::CartSession;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartChange};
use crate::domain::cart::services::InventoryService;
use crate::domain::cart::use_cases::update_product_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateProductAmountUseCaseImpl {
    pub session: Arc<CartSession>,
    pub inventory: Arc<dyn InventoryService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductAmountUseCase for UpdateProductAmountUseCaseImpl {
    async fn execute(&self, params: UpdateProductAmountParams) -> Result<Cart, CartError> {
        let product_id = params.product_id;

        if params.amount <= 0 {
            self.logger.debug(&format!(
                "Ignoring non-positive amount {} for product {}",
                params.amount, product_id
            ));
            return Err(CartError::InvalidAmount);
        }

        self.logger.info(&format!(
            "Updating amount of product {} to {}",
            product_id, params.amount
        ));

        let _guard = self.session.lock_product(product_id).await;

        let stock = self.inventory.get_stock(product_id).await?;
        // Positive here, so the magnitude is the amount itself.
        let amount = stock.ensure_covers(params.amount.unsigned_abs())?;

        let cart = self
            .session
            .commit(CartChange::SetAmount { product_id, amount })
            .await?;

        self.logger.info(&format!(
            "Amount of product {} updated to {}",
            product_id, amount
        ));
        Ok(cart)
    }
}
