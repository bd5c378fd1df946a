use serde::{Deserialize, Serialize};

use crate::goods::Goods;

/// What to do when a request is priced against a catalog entry with zero quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroStockPolicy {
    /// Refuse to price the request.
    #[default]
    Reject,
    /// Divide anyway and carry the non-finite unit price into the line item.
    Propagate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingConfig {
    pub zero_stock_policy: ZeroStockPolicy,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PricingError {
    #[error("Catalog entry {0} has zero quantity, unit price is undefined")]
    ZeroStock(String),
}

/// Reconstruct the unit price of a catalog entry from its amount and quantity.
pub fn derive_unit_price(entry: &Goods, policy: ZeroStockPolicy) -> Result<f64, PricingError> {
    if entry.quantity() == 0 && policy == ZeroStockPolicy::Reject {
        return Err(PricingError::ZeroStock(entry.name().to_string()));
    }

    Ok(entry.amount() / entry.quantity() as f64)
}
