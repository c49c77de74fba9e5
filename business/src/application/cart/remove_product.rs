use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::session::CartSession;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartChange};
use crate::domain::cart::use_cases::remove_product::{RemoveProductParams, RemoveProductUseCase};
use crate::domain::logger::Logger;

pub struct RemoveProductUseCaseImpl {
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveProductUseCase for RemoveProductUseCaseImpl {
    async fn execute(&self, params: RemoveProductParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Removing product from cart: {}", params.product_id));

        let _guard = self.session.lock_product(params.product_id).await;
        let cart = self
            .session
            .commit(CartChange::Remove(params.product_id))
            .await?;

        self.logger
            .info(&format!("Product removed from cart: {}", params.product_id));
        Ok(cart)
    }
}
