use std::io::{self, Write};

use sklad_catalog::{pricing, Catalog, Goods, PricingConfig};
use sklad_order::{Customer, CustomerId, SalesRepresentative};
use sklad_shared::WarehouseEvent;

use crate::{CoreError, CoreResult};

/// The warehouse aggregate: catalog, customers and sales representatives
#[derive(Debug, Clone)]
pub struct Warehouse {
    name: String,
    catalog: Catalog,
    customers: Vec<Customer>,
    representatives: Vec<SalesRepresentative>,
    pricing: PricingConfig,
}

impl Warehouse {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_pricing(name, PricingConfig::default())
    }

    pub fn with_pricing(name: impl Into<String>, pricing: PricingConfig) -> Self {
        Self {
            name: name.into(),
            catalog: Catalog::new(),
            customers: Vec::new(),
            representatives: Vec::new(),
            pricing,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn representatives(&self) -> &[SalesRepresentative] {
        &self.representatives
    }

    /// Register a customer. The warehouse keeps the only copy from here on.
    pub fn add_customer(&mut self, customer: Customer) -> CustomerId {
        let id = customer.id();
        WarehouseEvent::customer_registered(id.0, customer.name(), customer.identity().email()).emit();
        self.customers.push(customer);
        id
    }

    /// Stock a product. An existing entry with the same name is replaced outright.
    pub fn add_goods(&mut self, goods: Goods) {
        let event = WarehouseEvent::goods_stocked(
            goods.name(),
            goods.unit_price(),
            goods.quantity(),
            self.catalog.contains(goods.name()),
        );
        self.catalog.insert(goods);
        event.emit();
    }

    pub fn search_goods(&self, product_name: &str) -> Option<&Goods> {
        self.catalog.get(product_name)
    }

    /// First registered customer whose name (not surname) matches
    pub fn find_customer_by_name(&mut self, customer_name: &str) -> Option<&mut Customer> {
        self.customers.iter_mut().find(|c| c.name() == customer_name)
    }

    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|c| c.id() == id)
    }

    /// Record a customer's request for a product, priced at the catalog's
    /// current unit price. Returns the new line item.
    ///
    /// The catalog entry is left as is; requests do not draw down stock.
    pub fn place_request(&mut self, customer_name: &str, product_name: &str, quantity: i32) -> CoreResult<Goods> {
        let entry = self
            .search_goods(product_name)
            .ok_or_else(|| CoreError::ProductNotFound(product_name.to_string()))?;
        let unit_price = pricing::derive_unit_price(entry, self.pricing.zero_stock_policy)?;
        let line_item = Goods::new(product_name, unit_price, quantity);

        let customer = self
            .find_customer_by_name(customer_name)
            .ok_or_else(|| CoreError::CustomerNotFound(customer_name.to_string()))?;
        customer.add_goods(line_item.clone());

        WarehouseEvent::request_processed(
            customer.id().0,
            product_name,
            quantity,
            line_item.amount(),
            customer.total_payment(),
        )
        .emit();

        Ok(line_item)
    }

    pub fn add_representative(&mut self, representative: SalesRepresentative) -> usize {
        self.representatives.push(representative);
        self.representatives.len() - 1
    }

    pub fn assign_customer(&mut self, representative: usize, customer: CustomerId) -> CoreResult<()> {
        if self.customer(customer).is_none() {
            return Err(CoreError::CustomerNotFound(customer.to_string()));
        }

        let rep = self
            .representatives
            .get_mut(representative)
            .ok_or(CoreError::RepresentativeNotFound(representative))?;
        rep.add_customer(customer);
        Ok(())
    }

    pub fn representative_turnover(&self, representative: usize) -> CoreResult<f64> {
        self.representatives
            .get(representative)
            .map(|rep| rep.calculate_daily_turnover(&self.customers))
            .ok_or(CoreError::RepresentativeNotFound(representative))
    }

    pub fn write_all_customers_info<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for customer in &self.customers {
            write!(out, "{}", customer)?;
        }
        Ok(())
    }

    /// Every customer's info, as `write_all_customers_info` renders it
    pub fn customers_report(&self) -> String {
        self.customers.iter().map(Customer::to_string).collect()
    }

    pub fn calculate_turnover(&self) -> f64 {
        self.customers.iter().map(Customer::total_payment).sum()
    }
}
