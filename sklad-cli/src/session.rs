use std::io::{self, BufRead, Write};
use std::str::FromStr;

use sklad_catalog::PricingError;
use sklad_core::{transition, Command, CoreError, CustomerDraft, MenuChoice, Outcome, Warehouse};

use crate::input::TokenReader;

pub const MENU: &str = "\nMenu:\n\
                        1. Add Goods\n\
                        2. Add Customer\n\
                        3. Implement a Request\n\
                        4. Print Information\n\
                        5. Exit\n\
                        Enter your choice: ";

const INVALID_CHOICE: &str = "Invalid choice! Try again.";
const INVALID_NUMBER: &str = "Invalid number! Try again.";

/// One operator session: reads menu choices and fields from `input`, applies
/// them to the warehouse and writes prompts and results to `out`.
pub struct Session<R, W> {
    input: TokenReader<R>,
    out: W,
    warehouse: Warehouse,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, out: W, warehouse: Warehouse) -> Self {
        Self {
            input: TokenReader::new(input),
            out,
            warehouse,
        }
    }

    pub fn warehouse(&self) -> &Warehouse {
        &self.warehouse
    }

    pub fn into_parts(self) -> (Warehouse, W) {
        (self.warehouse, self.out)
    }

    /// Run until the operator picks Exit or the input ends.
    pub fn run(&mut self) -> io::Result<()> {
        tracing::info!(warehouse = self.warehouse.name(), "Session started");

        loop {
            write!(self.out, "{}", MENU)?;
            self.out.flush()?;

            let Some(token) = self.input.next_token()? else {
                break;
            };

            let choice = match parse_choice(&token) {
                Ok(choice) => choice,
                Err(e) => {
                    tracing::debug!("Rejected menu input {:?}: {}", token, e);
                    writeln!(self.out, "{}", INVALID_CHOICE)?;
                    continue;
                }
            };

            let Some(command) = self.read_command(choice)? else {
                break;
            };

            match transition(&mut self.warehouse, command) {
                Ok(Outcome::Exit) => {
                    writeln!(self.out, "Exiting program.")?;
                    tracing::info!("Session ended by operator");
                    return Ok(());
                }
                Ok(outcome) => self.render(outcome)?,
                Err(e) => {
                    tracing::debug!("Menu action failed: {}", e);
                    writeln!(self.out, "{}", error_message(&e))?;
                }
            }
        }

        tracing::info!("Input ended, closing session");
        Ok(())
    }

    /// Prompt for the fields of the chosen action. `None` if the input ends first.
    fn read_command(&mut self, choice: MenuChoice) -> io::Result<Option<Command>> {
        let command = match choice {
            MenuChoice::AddGoods => {
                let Some(product_name) = self.prompt("Enter product name: ")? else {
                    return Ok(None);
                };
                let Some(unit_price) = self.prompt_number::<f64>("Enter unit price: ")? else {
                    return Ok(None);
                };
                let Some(quantity) = self.prompt_number::<i32>("Enter quantity: ")? else {
                    return Ok(None);
                };
                Command::AddGoods {
                    product_name,
                    unit_price,
                    quantity,
                }
            }
            MenuChoice::AddCustomer => {
                let Some(name) = self.prompt("Enter customer name: ")? else {
                    return Ok(None);
                };
                let Some(surname) = self.prompt("Enter customer surname: ")? else {
                    return Ok(None);
                };
                let Some(phone) = self.prompt("Enter phone: ")? else {
                    return Ok(None);
                };
                let Some(email) = self.prompt("Enter email: ")? else {
                    return Ok(None);
                };
                let Some(company_name) = self.prompt("Enter company name: ")? else {
                    return Ok(None);
                };
                let Some(delivery_address) = self.prompt("Enter delivery address: ")? else {
                    return Ok(None);
                };
                Command::AddCustomer(CustomerDraft {
                    name,
                    surname,
                    phone,
                    email,
                    company_name,
                    delivery_address,
                })
            }
            MenuChoice::ImplementRequest => {
                let Some(customer_name) = self.prompt("Enter customer name: ")? else {
                    return Ok(None);
                };
                let Some(product_name) = self.prompt("Enter product name: ")? else {
                    return Ok(None);
                };
                let Some(quantity) = self.prompt_number::<i32>("Enter quantity: ")? else {
                    return Ok(None);
                };
                Command::ImplementRequest {
                    customer_name,
                    product_name,
                    quantity,
                }
            }
            MenuChoice::PrintInformation => Command::PrintInformation,
            MenuChoice::Exit => Command::Exit,
        };

        Ok(Some(command))
    }

    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", prompt)?;
        self.out.flush()?;
        self.input.next_token()
    }

    /// Prompt until the operator enters a value that parses as `T`
    fn prompt_number<T: FromStr>(&mut self, prompt: &str) -> io::Result<Option<T>> {
        loop {
            write!(self.out, "{}", prompt)?;
            self.out.flush()?;

            match self.input.next_parsed::<T>()? {
                Some(Ok(value)) => return Ok(Some(value)),
                Some(Err(token)) => {
                    tracing::debug!("Rejected numeric input {:?}", token);
                    writeln!(self.out, "{}", INVALID_NUMBER)?;
                }
                None => return Ok(None),
            }
        }
    }

    fn render(&mut self, outcome: Outcome) -> io::Result<()> {
        match outcome {
            Outcome::GoodsAdded => writeln!(self.out, "Goods added successfully!"),
            Outcome::CustomerAdded(_) => writeln!(self.out, "Customer added successfully!"),
            Outcome::RequestProcessed(_) => writeln!(self.out, "Request successfully processed!"),
            Outcome::Report(report) => write!(self.out, "{}", report),
            Outcome::Exit => Ok(()),
        }
    }
}

fn parse_choice(token: &str) -> Result<MenuChoice, String> {
    let number = token.parse::<i64>().map_err(|e| e.to_string())?;
    MenuChoice::try_from(number).map_err(|e| e.to_string())
}

fn error_message(error: &CoreError) -> String {
    match error {
        CoreError::ProductNotFound(_) => "Product not found!".to_string(),
        CoreError::CustomerNotFound(_) => "Customer not found!".to_string(),
        CoreError::Pricing(PricingError::ZeroStock(_)) => "Product has no stock to price!".to_string(),
        CoreError::InvalidChoice(_) => INVALID_CHOICE.to_string(),
        CoreError::RepresentativeNotFound(_) => error.to_string(),
    }
}
