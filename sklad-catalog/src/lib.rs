pub mod goods;
pub mod pricing;
pub mod catalog;

pub use goods::{format_amount, Goods};
pub use pricing::{PricingConfig, PricingError, ZeroStockPolicy};
pub use catalog::Catalog;
