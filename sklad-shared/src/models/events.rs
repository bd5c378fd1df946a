use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::pii::Masked;

#[derive(Debug, Serialize, Clone)]
pub struct GoodsStockedEvent {
    pub product_name: String,
    pub unit_price: f64,
    pub quantity: i32,
    /// True when an existing catalog entry was overwritten
    pub replaced: bool,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, Clone)]
pub struct CustomerRegisteredEvent {
    pub customer_id: Uuid,
    pub name: String,
    pub email: Masked<String>,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RequestProcessedEvent {
    pub customer_id: Uuid,
    pub product_name: String,
    pub quantity: i32,
    pub amount: f64,
    pub total_payment: f64,
    pub timestamp: i64,
}

#[derive(Debug, Serialize, Clone)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WarehouseEvent {
    GoodsStocked(GoodsStockedEvent),
    CustomerRegistered(CustomerRegisteredEvent),
    RequestProcessed(RequestProcessedEvent),
}

impl WarehouseEvent {
    pub fn goods_stocked(product_name: &str, unit_price: f64, quantity: i32, replaced: bool) -> Self {
        Self::GoodsStocked(GoodsStockedEvent {
            product_name: product_name.to_string(),
            unit_price,
            quantity,
            replaced,
            timestamp: now(),
        })
    }

    pub fn customer_registered(customer_id: Uuid, name: &str, email: &str) -> Self {
        Self::CustomerRegistered(CustomerRegisteredEvent {
            customer_id,
            name: name.to_string(),
            email: Masked::new(email.to_string()),
            timestamp: now(),
        })
    }

    pub fn request_processed(
        customer_id: Uuid,
        product_name: &str,
        quantity: i32,
        amount: f64,
        total_payment: f64,
    ) -> Self {
        Self::RequestProcessed(RequestProcessedEvent {
            customer_id,
            product_name: product_name.to_string(),
            quantity,
            amount,
            total_payment,
            timestamp: now(),
        })
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::GoodsStocked(_) => "GOODS_STOCKED",
            Self::CustomerRegistered(_) => "CUSTOMER_REGISTERED",
            Self::RequestProcessed(_) => "REQUEST_PROCESSED",
        }
    }

    /// Publish the event to the log as a JSON payload.
    pub fn emit(&self) {
        match serde_json::to_string(self) {
            Ok(payload) => tracing::debug!(kind = self.kind(), %payload, "warehouse event"),
            Err(e) => tracing::warn!(kind = self.kind(), "Failed to serialize event: {}", e),
        }
    }
}

fn now() -> i64 {
    Utc::now().timestamp_millis()
}
