use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartProduct;
use business::domain::shared::value_objects::ProductId;

/// Stored shape of a cart entry. Unknown fields written by older clients are ignored.
#[derive(Debug, Serialize, Deserialize)]
pub struct CartProductEntity {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl CartProductEntity {
    pub fn from_domain(product: &CartProduct) -> Self {
        Self {
            id: product.id.value(),
            title: product.title.clone(),
            price: product.price,
            image: product.image.clone(),
            amount: product.amount,
        }
    }

    pub fn into_domain(self) -> CartProduct {
        CartProduct::from_repository(
            ProductId::new(self.id),
            self.title,
            self.price,
            self.image,
            self.amount,
        )
    }
}
