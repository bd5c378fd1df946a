//! The console menu as an explicit state machine.
//!
//! Each menu action is a [`Command`] carrying its already-parsed input, and
//! [`transition`] applies one command to the warehouse. Nothing here touches
//! stdin or stdout.

use sklad_catalog::Goods;
use sklad_order::{Customer, CustomerId, Person};

use crate::warehouse::Warehouse;
use crate::{CoreError, CoreResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddGoods = 1,
    AddCustomer = 2,
    ImplementRequest = 3,
    PrintInformation = 4,
    Exit = 5,
}

impl TryFrom<i64> for MenuChoice {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::AddGoods),
            2 => Ok(Self::AddCustomer),
            3 => Ok(Self::ImplementRequest),
            4 => Ok(Self::PrintInformation),
            5 => Ok(Self::Exit),
            other => Err(CoreError::InvalidChoice(other)),
        }
    }
}

/// Registration fields for a new customer, one token each
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerDraft {
    pub name: String,
    pub surname: String,
    pub phone: String,
    pub email: String,
    pub company_name: String,
    pub delivery_address: String,
}

impl CustomerDraft {
    pub fn into_customer(self) -> Customer {
        Customer::new(
            Person::new(self.name, self.surname, self.phone, self.email),
            self.company_name,
            self.delivery_address,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddGoods {
        product_name: String,
        unit_price: f64,
        quantity: i32,
    },
    AddCustomer(CustomerDraft),
    ImplementRequest {
        customer_name: String,
        product_name: String,
        quantity: i32,
    },
    PrintInformation,
    Exit,
}

impl Command {
    pub fn choice(&self) -> MenuChoice {
        match self {
            Command::AddGoods { .. } => MenuChoice::AddGoods,
            Command::AddCustomer(_) => MenuChoice::AddCustomer,
            Command::ImplementRequest { .. } => MenuChoice::ImplementRequest,
            Command::PrintInformation => MenuChoice::PrintInformation,
            Command::Exit => MenuChoice::Exit,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    GoodsAdded,
    CustomerAdded(CustomerId),
    RequestProcessed(Goods),
    Report(String),
    Exit,
}

/// Apply one menu command to the warehouse
pub fn transition(warehouse: &mut Warehouse, command: Command) -> CoreResult<Outcome> {
    tracing::debug!(choice = ?command.choice(), "Applying menu command");

    match command {
        Command::AddGoods {
            product_name,
            unit_price,
            quantity,
        } => {
            warehouse.add_goods(Goods::new(product_name, unit_price, quantity));
            Ok(Outcome::GoodsAdded)
        }
        Command::AddCustomer(draft) => {
            let id = warehouse.add_customer(draft.into_customer());
            Ok(Outcome::CustomerAdded(id))
        }
        Command::ImplementRequest {
            customer_name,
            product_name,
            quantity,
        } => {
            let line_item = warehouse.place_request(&customer_name, &product_name, quantity)?;
            tracing::debug!(turnover = warehouse.calculate_turnover(), "Request recorded");
            Ok(Outcome::RequestProcessed(line_item))
        }
        Command::PrintInformation => Ok(Outcome::Report(warehouse.customers_report())),
        Command::Exit => Ok(Outcome::Exit),
    }
}
