use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::application::cart::manager::CartManager;
use business::domain::cart::use_cases::update_product_amount::UpdateProductAmountParams;
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{CartOperationResponse, CartResponse, UpdateProductAmountRequest};
use crate::api::error::ErrorResponse;
use crate::api::notification::dto::NotificationResponse;
use crate::api::tags::ApiTags;

pub struct CartApi {
    manager: Arc<CartManager>,
}

impl CartApi {
    pub fn new(manager: Arc<CartManager>) -> Self {
        Self { manager }
    }

    /// Current cart plus the message the operation raised, if any.
    async fn respond(&self, message: Option<&'static str>) -> CartOperationResponse {
        CartOperationResponse {
            cart: self.manager.cart().await.into(),
            notifications: message
                .map(NotificationResponse::raised_now)
                .into_iter()
                .collect(),
        }
    }
}

fn parse_product_id(raw: &str) -> Result<ProductId, Json<ErrorResponse>> {
    raw.parse::<ProductId>()
        .map_err(|_| ErrorResponse::validation("cart.invalid_product_id"))
}

/// Shopping cart API
///
/// Cart operations never fail: a rejected operation leaves the cart unchanged
/// and reports why in `notifications`.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the cart entries in insertion order with totals.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> Json<CartResponse> {
        Json(self.manager.cart().await.into())
    }

    /// Add one unit of a product
    ///
    /// Appends the product with amount 1, or increments its amount, when stock allows.
    #[oai(
        path = "/cart/products/:product_id",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn add_product(&self, product_id: Path<String>) -> CartOperationApiResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return CartOperationApiResponse::BadRequest(json),
        };

        let message = self.manager.add_product(product_id).await;
        CartOperationApiResponse::Ok(Json(self.respond(message).await))
    }

    /// Remove a product
    ///
    /// Removes the whole entry from the cart.
    #[oai(
        path = "/cart/products/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_product(&self, product_id: Path<String>) -> CartOperationApiResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return CartOperationApiResponse::BadRequest(json),
        };

        let message = self.manager.remove_product(product_id).await;
        CartOperationApiResponse::Ok(Json(self.respond(message).await))
    }

    /// Set the amount of a product
    ///
    /// Sets the absolute quantity of an entry already in the cart, within stock.
    #[oai(
        path = "/cart/products/:product_id/amount",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_product_amount(
        &self,
        product_id: Path<String>,
        body: Json<UpdateProductAmountRequest>,
    ) -> CartOperationApiResponse {
        let product_id = match parse_product_id(&product_id.0) {
            Ok(id) => id,
            Err(json) => return CartOperationApiResponse::BadRequest(json),
        };

        let message = self
            .manager
            .update_product_amount(UpdateProductAmountParams {
                product_id,
                amount: body.0.amount,
            })
            .await;
        CartOperationApiResponse::Ok(Json(self.respond(message).await))
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CartOperationApiResponse {
    #[oai(status = 200)]
    Ok(Json<CartOperationResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
}
