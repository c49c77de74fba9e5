use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;

use business::domain::cart::model::{CatalogProduct, Stock};
use business::domain::cart::services::{InventoryError, InventoryService};
use business::domain::shared::value_objects::ProductId;

use crate::client::InventoryClient;

#[derive(Deserialize)]
struct StockResponse {
    amount: u32,
}

#[derive(Deserialize)]
struct ProductResponse {
    title: String,
    price: f64,
    image: String,
}

pub struct InventoryServiceHttp {
    client: InventoryClient,
}

impl InventoryServiceHttp {
    pub fn new(client: InventoryClient) -> Self {
        Self { client }
    }

    fn check_status(status: StatusCode) -> Result<(), InventoryError> {
        match status {
            s if s.is_success() => Ok(()),
            StatusCode::NOT_FOUND => Err(InventoryError::NotFound),
            _ => Err(InventoryError::Unavailable),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T, InventoryError> {
        let response = self.client.client.get(url).send().await.map_err(|err| {
            tracing::warn!(target: "storefront", component = "inventory", "GET {} failed: {}", url, err);
            InventoryError::Unavailable
        })?;

        Self::check_status(response.status())?;

        response
            .json::<T>()
            .await
            .map_err(|_| InventoryError::InvalidResponse)
    }
}

#[async_trait]
impl InventoryService for InventoryServiceHttp {
    async fn get_stock(&self, product_id: ProductId) -> Result<Stock, InventoryError> {
        let data: StockResponse = self.fetch(&self.client.stock_url(product_id)).await?;

        Ok(Stock::new(product_id, data.amount))
    }

    async fn get_product(&self, product_id: ProductId) -> Result<CatalogProduct, InventoryError> {
        let data: ProductResponse = self.fetch(&self.client.product_url(product_id)).await?;

        Ok(CatalogProduct {
            id: product_id,
            title: data.title,
            price: data.price,
            image: data.image,
        })
    }
}
