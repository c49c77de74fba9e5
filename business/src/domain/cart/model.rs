use crate::domain::shared::value_objects::ProductId;

use super::errors::CartError;

/// Product display data as published by the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
}

/// Available quantity of a product. Fetched per operation, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stock {
    pub product_id: ProductId,
    pub amount: u32,
}

impl Stock {
    pub fn new(product_id: ProductId, amount: u32) -> Self {
        Self { product_id, amount }
    }

    /// Returns `requested` as a cart amount, or `StockExceeded` when it is more
    /// than what is available.
    pub fn ensure_covers(&self, requested: u64) -> Result<u32, CartError> {
        match u32::try_from(requested) {
            Ok(amount) if amount <= self.amount => Ok(amount),
            _ => Err(CartError::StockExceeded {
                product_id: self.product_id,
                requested,
                available: self.amount,
            }),
        }
    }
}

/// A cart entry. `amount` is always at least 1.
#[derive(Debug, Clone, PartialEq)]
pub struct CartProduct {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image: String,
    pub amount: u32,
}

impl CartProduct {
    /// A fresh entry for a product entering the cart, with a single unit.
    pub fn from_catalog(product: CatalogProduct) -> Self {
        Self {
            id: product.id,
            title: product.title,
            price: product.price,
            image: product.image,
            amount: 1,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        title: String,
        price: f64,
        image: String,
        amount: u32,
    ) -> Self {
        Self {
            id,
            title,
            price,
            image,
            amount,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.amount)
    }
}

/// Single-entry mutation, applied against the latest cart at commit time.
#[derive(Debug, Clone, PartialEq)]
pub enum CartChange {
    SetAmount { product_id: ProductId, amount: u32 },
    Append(CartProduct),
    Remove(ProductId),
}

impl CartChange {
    pub fn product_id(&self) -> ProductId {
        match self {
            CartChange::SetAmount { product_id, .. } => *product_id,
            CartChange::Append(product) => product.id,
            CartChange::Remove(product_id) => *product_id,
        }
    }
}

/// Ordered cart entries, in insertion order, at most one per product id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    products: Vec<CartProduct>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a cart from raw entries, rejecting duplicates and zero amounts.
    pub fn from_products(products: Vec<CartProduct>) -> Result<Self, CartError> {
        let mut cart = Cart::new();
        for product in products {
            cart.apply(CartChange::Append(product))?;
        }
        Ok(cart)
    }

    pub fn products(&self) -> &[CartProduct] {
        &self.products
    }

    pub fn into_products(self) -> Vec<CartProduct> {
        self.products
    }

    pub fn find(&self, product_id: ProductId) -> Option<&CartProduct> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.find(product_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Sum of all entry amounts.
    pub fn total_units(&self) -> u64 {
        self.products.iter().map(|p| u64::from(p.amount)).sum()
    }

    pub fn subtotal(&self) -> f64 {
        self.products.iter().map(CartProduct::line_total).sum()
    }

    /// Applies `change` in place. On error the cart is left untouched.
    pub fn apply(&mut self, change: CartChange) -> Result<(), CartError> {
        match change {
            CartChange::SetAmount { product_id, amount } => {
                if amount == 0 {
                    return Err(CartError::InvalidAmount);
                }
                let entry = self
                    .products
                    .iter_mut()
                    .find(|p| p.id == product_id)
                    .ok_or(CartError::ProductNotFound(product_id))?;
                entry.amount = amount;
            }
            CartChange::Append(product) => {
                if product.amount == 0 {
                    return Err(CartError::InvalidAmount);
                }
                if self.contains(product.id) {
                    return Err(CartError::DuplicatedProduct(product.id));
                }
                self.products.push(product);
            }
            CartChange::Remove(product_id) => {
                let index = self
                    .products
                    .iter()
                    .position(|p| p.id == product_id)
                    .ok_or(CartError::ProductNotFound(product_id))?;
                self.products.remove(index);
            }
        }
        Ok(())
    }
}
