pub mod models;
pub mod pii;

pub use models::events::WarehouseEvent;
pub use pii::Masked;
