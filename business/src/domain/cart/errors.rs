use crate::domain::shared::value_objects::ProductId;

use super::services::InventoryError;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.stock_exceeded")]
    StockExceeded {
        product_id: ProductId,
        requested: u64,
        available: u32,
    },
    #[error("cart.product_not_found")]
    ProductNotFound(ProductId),
    #[error("cart.duplicated_product")]
    DuplicatedProduct(ProductId),
    #[error("cart.invalid_amount")]
    InvalidAmount,
    #[error("inventory.unavailable")]
    Inventory(#[from] InventoryError),
}

/// The three mutating cart operations, as seen by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartOperation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

pub const STOCK_EXCEEDED_MESSAGE: &str = "Requested quantity is out of stock";
pub const ADD_PRODUCT_FAILED_MESSAGE: &str = "Error adding product";
pub const REMOVE_PRODUCT_FAILED_MESSAGE: &str = "Error removing product";
pub const UPDATE_PRODUCT_AMOUNT_FAILED_MESSAGE: &str = "Error updating product quantity";

impl CartOperation {
    /// Generic message shown for any failure other than a stock shortage.
    pub fn failure_message(&self) -> &'static str {
        match self {
            CartOperation::AddProduct => ADD_PRODUCT_FAILED_MESSAGE,
            CartOperation::RemoveProduct => REMOVE_PRODUCT_FAILED_MESSAGE,
            CartOperation::UpdateProductAmount => UPDATE_PRODUCT_AMOUNT_FAILED_MESSAGE,
        }
    }
}

impl std::fmt::Display for CartOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartOperation::AddProduct => write!(f, "add_product"),
            CartOperation::RemoveProduct => write!(f, "remove_product"),
            CartOperation::UpdateProductAmount => write!(f, "update_product_amount"),
        }
    }
}

impl CartError {
    /// User-facing message for this error raised by `operation`.
    ///
    /// `None` means the failure is silent. Only a non-positive target amount is.
    pub fn user_message(&self, operation: CartOperation) -> Option<&'static str> {
        match self {
            CartError::InvalidAmount if operation == CartOperation::UpdateProductAmount => None,
            CartError::StockExceeded { .. } if operation != CartOperation::RemoveProduct => {
                Some(STOCK_EXCEEDED_MESSAGE)
            }
            _ => Some(operation.failure_message()),
        }
    }
}
