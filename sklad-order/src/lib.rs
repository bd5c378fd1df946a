pub mod person;
pub mod customer;
pub mod representative;

pub use person::Person;
pub use customer::{Customer, CustomerId};
pub use representative::SalesRepresentative;
