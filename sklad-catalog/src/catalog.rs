use std::collections::HashMap;

use crate::goods::Goods;

/// Name-keyed catalog of the goods a warehouse holds
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    goods: HashMap<String, Goods>,
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            goods: HashMap::new(),
        }
    }

    /// Insert an entry, fully replacing any entry with the same product name.
    /// Returns the replaced entry.
    pub fn insert(&mut self, goods: Goods) -> Option<Goods> {
        let replaced = self.goods.insert(goods.name().to_string(), goods);

        if let Some(previous) = &replaced {
            tracing::debug!(
                product = previous.name(),
                old_quantity = previous.quantity(),
                "Catalog entry overwritten"
            );
        }

        replaced
    }

    /// Look up an entry. The returned borrow ends before any later insert can
    /// change the entry; clone it to keep the value.
    pub fn get(&self, product_name: &str) -> Option<&Goods> {
        self.goods.get(product_name)
    }

    pub fn contains(&self, product_name: &str) -> bool {
        self.goods.contains_key(product_name)
    }

    pub fn len(&self) -> usize {
        self.goods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goods.is_empty()
    }
}
