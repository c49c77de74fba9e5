use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use crate::key_value::store::SqliteKeyValueStore;

use super::entity::CartProductEntity;

pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

/// Stores the whole cart as a JSON array under one key.
pub struct CartRepositoryKeyValue {
    store: SqliteKeyValueStore,
    key: String,
}

impl CartRepositoryKeyValue {
    pub fn new(store: SqliteKeyValueStore, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryKeyValue {
    async fn load(&self) -> Result<Option<Cart>, RepositoryError> {
        let Some(raw) = self.store.read(&self.key).await? else {
            return Ok(None);
        };

        let entities: Vec<CartProductEntity> =
            serde_json::from_str(&raw).map_err(|_| RepositoryError::Corrupted)?;
        let cart = Cart::from_products(entities.into_iter().map(|e| e.into_domain()).collect())
            .map_err(|_| RepositoryError::Corrupted)?;

        Ok(Some(cart))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let entities: Vec<CartProductEntity> = cart
            .products()
            .iter()
            .map(CartProductEntity::from_domain)
            .collect();
        let raw = serde_json::to_string(&entities).map_err(|_| RepositoryError::Persistence)?;

        self.store.write(&self.key, &raw).await
    }
}
