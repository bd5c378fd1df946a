pub mod app_config;
pub mod menu;
pub mod warehouse;

use sklad_catalog::PricingError;

pub use menu::{transition, Command, CustomerDraft, MenuChoice, Outcome};
pub use warehouse::Warehouse;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CoreError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),
    #[error("Sales representative not found: #{0}")]
    RepresentativeNotFound(usize),
    #[error("Invalid menu choice: {0}")]
    InvalidChoice(i64),
    #[error("Pricing failed: {0}")]
    Pricing(#[from] PricingError),
}

pub type CoreResult<T> = Result<T, CoreError>;
