use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartProduct};

use crate::api::notification::dto::NotificationResponse;

#[derive(Debug, Clone, Object)]
pub struct UpdateProductAmountRequest {
    /// Target quantity. Values of zero or below are ignored.
    pub amount: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartProductResponse {
    /// Catalog product identifier
    pub id: u64,
    /// Display title
    pub title: String,
    /// Unit price
    pub price: f64,
    /// Image URL
    pub image: String,
    /// Units in the cart
    pub amount: u32,
    /// price × amount
    pub subtotal: f64,
}

impl From<CartProduct> for CartProductResponse {
    fn from(product: CartProduct) -> Self {
        Self {
            subtotal: product.line_total(),
            id: product.id.value(),
            title: product.title,
            price: product.price,
            image: product.image,
            amount: product.amount,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Entries in insertion order
    pub products: Vec<CartProductResponse>,
    /// Sum of all amounts
    pub total_units: u64,
    /// Sum of all entry subtotals
    pub subtotal: f64,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        let total_units = cart.total_units();
        let subtotal = cart.subtotal();
        Self {
            products: cart.into_products().into_iter().map(Into::into).collect(),
            total_units,
            subtotal,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartOperationResponse {
    /// Cart after the operation (unchanged when it was rejected)
    pub cart: CartResponse,
    /// Messages raised while the operation ran
    pub notifications: Vec<NotificationResponse>,
}
