use std::io::{self, Write};

use crate::customer::{Customer, CustomerId};

/// A sales representative and the customers assigned to them.
///
/// Holds handles, not customers: the warehouse owns every customer record and
/// handles are resolved against its customer list on each call.
#[derive(Debug, Clone, Default)]
pub struct SalesRepresentative {
    customers: Vec<CustomerId>,
}

impl SalesRepresentative {
    pub fn new() -> Self {
        Self {
            customers: Vec::new(),
        }
    }

    pub fn add_customer(&mut self, customer: CustomerId) {
        self.customers.push(customer);
    }

    pub fn customer_ids(&self) -> &[CustomerId] {
        &self.customers
    }

    /// Write the info of every assigned customer, in assignment order
    pub fn write_customers_info<W: Write>(&self, customers: &[Customer], out: &mut W) -> io::Result<()> {
        for customer in self.resolve(customers) {
            write!(out, "{}", customer)?;
        }
        Ok(())
    }

    /// Sum of total payments across the assigned customers
    pub fn calculate_daily_turnover(&self, customers: &[Customer]) -> f64 {
        self.resolve(customers).map(Customer::total_payment).sum()
    }

    fn resolve<'a>(&'a self, customers: &'a [Customer]) -> impl Iterator<Item = &'a Customer> + 'a {
        self.customers.iter().filter_map(move |id| {
            let found = customers.iter().find(|c| c.id() == *id);
            if found.is_none() {
                tracing::warn!(customer_id = %id, "Representative refers to an unknown customer");
            }
            found
        })
    }
}
