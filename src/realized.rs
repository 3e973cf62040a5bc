use crate::policy::GainTerm;
use crate::trade::Trade;
use crate::DISCOUNT_HOLDING_MONTHS;
use chrono::{Months, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One matched round trip: the portion of an open position consumed by a
/// closing trade, paired with that closing trade's portion.
///
/// The opening portion keeps the open position's original price and date,
/// the closing portion the closing trade's. Quantities always net to zero:
/// `opening.quantity == -closing.quantity`, with the opening side positive.
/// A lot is never mutated after it is created, so later splits of the live
/// open position cannot rewrite a lot's recorded basis.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct RealizedLot {
    opening: Trade,
    closing: Trade,
}

impl RealizedLot {
    /// Pairs `matched` units taken from `open` against `closing`.
    /// `matched` must be positive and no larger than either side.
    pub(crate) fn pair(open: &Trade, closing: &Trade, matched: Decimal) -> Self {
        RealizedLot {
            opening: Trade {
                instrument: open.instrument.clone(),
                quantity: matched,
                price: open.price,
                trade_date: open.trade_date,
            },
            closing: Trade {
                instrument: closing.instrument.clone(),
                quantity: -matched,
                price: closing.price,
                trade_date: closing.trade_date,
            },
        }
    }

    pub fn opening(&self) -> &Trade {
        &self.opening
    }

    pub fn closing(&self) -> &Trade {
        &self.closing
    }

    /// Matched quantity, always positive.
    pub fn quantity(&self) -> Decimal {
        self.opening.quantity
    }

    /// Profit or loss realized by this lot.
    pub fn gain(&self) -> Decimal {
        (self.closing.price - self.opening.price) * self.opening.quantity
    }

    /// True when the lot was opened strictly more than `months` before it closed.
    pub fn held_longer_than(&self, months: u32) -> bool {
        match self.closing.trade_date.checked_sub_months(Months::new(months)) {
            Some(cutoff) => self.opening.trade_date < cutoff,
            None => false,
        }
    }

    /// Classification against the default discount holding period.
    pub fn term(&self) -> GainTerm {
        if self.held_longer_than(DISCOUNT_HOLDING_MONTHS) {
            GainTerm::LongTerm
        } else {
            GainTerm::ShortTerm
        }
    }
}

/// instrument, quantity, open price, open date, close price, close date
impl From<&str> for RealizedLot {
    fn from(s: &str) -> Self {
        let field: Vec<&str> = s.split(',').collect();
        let opening = Trade {
            instrument: field[0].to_owned(),
            quantity: field[1].parse().unwrap(),
            price: field[2].parse().unwrap(),
            trade_date: NaiveDate::parse_from_str(field[3], "%Y-%m-%d").unwrap(),
        };
        let closing = Trade {
            instrument: field[0].to_owned(),
            quantity: -opening.quantity,
            price: field[4].parse().unwrap(),
            trade_date: NaiveDate::parse_from_str(field[5], "%Y-%m-%d").unwrap(),
        };
        RealizedLot { opening, closing }
    }
}

impl fmt::Display for RealizedLot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: opened {} @ {}, closed {} @ {}, gain {:.2}",
            self.quantity(),
            self.opening.instrument,
            self.opening.trade_date,
            self.opening.price,
            self.closing.trade_date,
            self.closing.price,
            self.gain()
        )
    }
}

/// Total profit / loss over a slice of realized lots.
pub fn total_gain(lots: &[RealizedLot]) -> Decimal {
    lots.iter().map(|lot| lot.gain()).sum()
}

/// Lots whose closing date falls inside `start..=end`, e.g. one financial year.
pub fn closed_between(lots: &[RealizedLot], start: NaiveDate, end: NaiveDate) -> Vec<RealizedLot> {
    lots.iter()
        .filter(|lot| start <= lot.closing.trade_date && lot.closing.trade_date <= end)
        .cloned()
        .collect()
}

/// Partition into (long-term, short-term) by the default discount period.
pub fn split_by_term(lots: &[RealizedLot]) -> (Vec<RealizedLot>, Vec<RealizedLot>) {
    lots.iter()
        .cloned()
        .partition(|lot| lot.term() == GainTerm::LongTerm)
}
