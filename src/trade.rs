use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single buy or sell in one instrument.
///
/// instrument, quantity, price, trade date
///
/// `quantity` is signed: positive opens or extends a long position, negative
/// closes part of one. `price` is currency units per unit of quantity.
/// Trade dates carry day precision only.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub instrument: String,
    pub quantity: Decimal,
    pub price: Decimal,
    pub trade_date: NaiveDate,
}

impl From<&str> for Trade {
    fn from(s: &str) -> Self {
        let field: Vec<&str> = s.split(',').collect();
        Trade {
            instrument: field[0].to_owned(),
            quantity: field[1].parse().unwrap(),
            price: field[2].parse().unwrap(),
            trade_date: NaiveDate::parse_from_str(field[3], "%Y-%m-%d").unwrap(),
        }
    }
}

impl Trade {
    pub fn new(instrument: &str, quantity: Decimal, price: Decimal, trade_date: NaiveDate) -> Self {
        Trade {
            instrument: instrument.to_owned(),
            quantity,
            price,
            trade_date,
        }
    }

    /// True when this trade adds to the open position rather than closing it.
    pub fn is_opening(&self) -> bool {
        self.quantity > Decimal::ZERO
    }
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} @ {} on {}",
            self.quantity, self.instrument, self.price, self.trade_date
        )
    }
}
