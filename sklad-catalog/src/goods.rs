use serde::{Deserialize, Serialize};
use std::fmt;

/// A priced product line: either a catalog entry or one requested line item
/// of a customer's order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goods {
    product_name: String,
    unit_price: f64,
    quantity: i32,
    amount: f64,
}

impl Goods {
    /// Zero or negative prices and quantities are accepted as given.
    pub fn new(product_name: impl Into<String>, unit_price: f64, quantity: i32) -> Self {
        Self {
            product_name: product_name.into(),
            unit_price,
            quantity,
            amount: calculate_amount(unit_price, quantity),
        }
    }

    pub fn name(&self) -> &str {
        &self.product_name
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

fn calculate_amount(unit_price: f64, quantity: i32) -> f64 {
    unit_price * quantity as f64
}

/// Significant digits shown for prices and amounts
const DISPLAY_PRECISION: i32 = 6;

/// Render a price or amount with six significant digits and trailing zeros
/// stripped, switching to exponent form (`1e+20`) below 1e-4 or from 1e6 up.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:.*e}", (DISPLAY_PRECISION - 1) as usize, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= DISPLAY_PRECISION {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (DISPLAY_PRECISION - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

impl fmt::Display for Goods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Product: {}, Unit Price: {}, Quantity: {}, Amount: {}",
            self.product_name,
            format_amount(self.unit_price),
            self.quantity,
            format_amount(self.amount)
        )
    }
}
