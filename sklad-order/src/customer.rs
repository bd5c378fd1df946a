use serde::{Deserialize, Serialize};
use sklad_catalog::{format_amount, Goods};
use std::fmt;
use uuid::Uuid;

use crate::person::Person;

/// Stable handle to a registered customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub Uuid);

impl CustomerId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CustomerId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer of the warehouse and the goods they have requested
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    identity: Person,
    company_name: String,
    delivery_address: String,
    ordered_goods: Vec<Goods>,
    total_payment: f64,
}

impl Customer {
    pub fn new(
        identity: Person,
        company_name: impl Into<String>,
        delivery_address: impl Into<String>,
    ) -> Self {
        Self {
            id: CustomerId::new(),
            identity,
            company_name: company_name.into(),
            delivery_address: delivery_address.into(),
            ordered_goods: Vec::new(),
            total_payment: 0.0,
        }
    }

    /// Append a line item to the order. Repeated products stay separate lines.
    pub fn add_goods(&mut self, goods: Goods) {
        self.total_payment += goods.amount();
        self.ordered_goods.push(goods);
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn identity(&self) -> &Person {
        &self.identity
    }

    pub fn name(&self) -> &str {
        self.identity.name()
    }

    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn ordered_goods(&self) -> &[Goods] {
        &self.ordered_goods
    }

    pub fn total_payment(&self) -> f64 {
        self.total_payment
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.identity)?;
        writeln!(
            f,
            "Company: {}, Delivery Address: {}, Total Payment: {}",
            self.company_name,
            self.delivery_address,
            format_amount(self.total_payment)
        )?;
        writeln!(f, "Goods requested: ")?;
        for goods in &self.ordered_goods {
            writeln!(f, "{}", goods)?;
        }
        Ok(())
    }
}
