//! Most recent product fetch, held for the detail modal
//!
//! Only one fetch is kept: every `replace` discards the previous contents.
//! Lookups go by id first so a re-ordered or filtered cache never shows the
//! wrong product; the position from the card is only a fallback.

use std::collections::HashMap;

use crate::product::{Product, ProductId};

#[derive(Debug, Default, Clone)]
pub struct ProductCache {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl ProductCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a fresh fetch
    pub fn replace(&mut self, products: Vec<Product>) {
        self.by_id = products
            .iter()
            .enumerate()
            .map(|(index, product)| (product.id.clone(), index))
            .collect();
        self.products = products;
        tracing::debug!("Product cache holds {} entries", self.products.len());
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).map(|&index| &self.products[index])
    }

    pub fn at(&self, index: usize) -> Option<&Product> {
        self.products.get(index)
    }

    /// Resolve a card's product: by id, else by position
    pub fn resolve(&self, id: &ProductId, index: usize) -> Option<&Product> {
        self.get(id).or_else(|| {
            let fallback = self.at(index);
            if fallback.is_some() {
                tracing::debug!("Product {} not cached, falling back to position {}", id, index);
            }
            fallback
        })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
