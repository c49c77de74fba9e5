use async_trait::async_trait;

use crate::domain::shared::value_objects::ProductId;

use super::model::{CatalogProduct, Stock};

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory.unavailable")]
    Unavailable,
    #[error("inventory.not_found")]
    NotFound,
    #[error("inventory.invalid_response")]
    InvalidResponse,
}

/// Service port for the remote inventory (stock levels and catalog data).
///
/// Results are authoritative for the duration of one cart operation and are
/// never cached by the caller.
#[async_trait]
pub trait InventoryService: Send + Sync {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError>;

    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, InventoryError>;
}
