use crate::error::MatchError;
use crate::policy::MatchPolicy;
use crate::realized::RealizedLot;
use crate::trade::Trade;
use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::fmt;

/// Pairs the trades of a single instrument into realized lots.
///
/// add_trade -> opening trade queued as an open position OR
///     closing trade consumed against the queue, emitting one realized lot
///     per open position it touches
///
/// Open positions are kept sorted by ascending trade date, so FIFO and LIFO
/// differ only in which end of the queue a closing trade consumes first.
/// A closing trade larger than the selected open position carries on into
/// the next one; a smaller one shrinks the selected position in place and
/// leaves it queued.
///
/// The matcher is bound to one instrument and one policy for its lifetime.
/// Every accepted trade is kept in an append-only audit trail, and every
/// realized lot in an append-only ledger. A failed call may leave lots
/// already realized by that call in the ledger (no rollback).
#[derive(Debug, Clone)]
pub struct LotMatcher {
    instrument: String,
    policy: MatchPolicy,
    all_trades: Vec<Trade>,
    open_positions: VecDeque<Trade>,
    realized: Vec<RealizedLot>,
}

impl LotMatcher {
    pub fn new(instrument: &str, policy: MatchPolicy) -> Self {
        LotMatcher {
            instrument: instrument.to_owned(),
            policy,
            all_trades: Vec::new(),
            open_positions: VecDeque::new(),
            realized: Vec::new(),
        }
    }

    /// Submits one trade, returning the lots it realized (empty for an
    /// opening trade).
    ///
    /// Fails with `InstrumentMismatch` before touching any state. The other
    /// failures happen mid-match: lots realized before the failure stay in
    /// the ledger and the consumed open positions stay consumed.
    pub fn add_trade(&mut self, trade: Trade) -> Result<Vec<RealizedLot>, MatchError> {
        if trade.instrument != self.instrument {
            return Err(MatchError::InstrumentMismatch {
                expected: self.instrument.clone(),
                found: trade.instrument,
            });
        }
        self.all_trades.push(trade.clone());
        if trade.is_opening() {
            self.queue_open(trade);
            Ok(vec![])
        } else {
            self.close_against_open(&trade)
        }
    }

    /// Submits trades one by one, accumulating realized lots. Stops at the
    /// first failure; trades already submitted stay applied.
    pub fn extend_trades(&mut self, trades: &[Trade]) -> Result<Vec<RealizedLot>, MatchError> {
        let mut lots = Vec::new();
        for trade in trades {
            lots.extend(self.add_trade(trade.clone())?);
        }
        Ok(lots)
    }

    // Stable insert: an equal-dated position goes behind the ones already
    // queued, so same-date ties keep submission order.
    fn queue_open(&mut self, trade: Trade) {
        debug!("{}: queueing open position {}", self.instrument, trade);
        let idx = self
            .open_positions
            .iter()
            .position(|open| open.trade_date > trade.trade_date)
            .unwrap_or(self.open_positions.len());
        self.open_positions.insert(idx, trade);
    }

    fn close_against_open(&mut self, closing: &Trade) -> Result<Vec<RealizedLot>, MatchError> {
        let first_new = self.realized.len();
        let mut remaining = closing.quantity.abs();
        while remaining > Decimal::ZERO {
            let idx = self.next_open_index(closing.trade_date)?;
            let matched = self.open_positions[idx].quantity.min(remaining);
            let lot = RealizedLot::pair(&self.open_positions[idx], closing, matched);
            debug!("{}: realized {}", self.instrument, lot);
            if self.open_positions[idx].quantity > matched {
                self.open_positions[idx].quantity -= matched;
            } else {
                self.open_positions.remove(idx);
            }
            remaining -= matched;
            self.realized.push(lot);
        }
        Ok(self.realized[first_new..].to_vec())
    }

    // The policy picks which end of the queue to consume; the selected
    // position must be dated on or before the closing trade.
    fn next_open_index(&self, closing_date: NaiveDate) -> Result<usize, MatchError> {
        if self.open_positions.is_empty() {
            return Err(MatchError::InsufficientOpenPositions {
                instrument: self.instrument.clone(),
            });
        }
        let idx = match self.policy {
            MatchPolicy::Fifo => 0,
            MatchPolicy::Lifo => self.open_positions.len() - 1,
        };
        if self.open_positions[idx].trade_date > closing_date {
            return Err(MatchError::NoEligibleOpenPosition {
                instrument: self.instrument.clone(),
                trade_date: closing_date,
            });
        }
        Ok(idx)
    }

    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Every accepted trade, in submission order.
    pub fn all_trades(&self) -> &[Trade] {
        &self.all_trades
    }

    /// Not-yet-consumed positions, sorted by ascending trade date.
    pub fn open_positions(&self) -> Vec<Trade> {
        self.open_positions.iter().cloned().collect()
    }

    /// Every realized lot, in the order the matches occurred.
    pub fn realized_lots(&self) -> &[RealizedLot] {
        &self.realized
    }

    /// Total unmatched quantity still open.
    pub fn open_quantity(&self) -> Decimal {
        self.open_positions.iter().map(|open| open.quantity).sum()
    }
}

impl fmt::Display for LotMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({:?}); open quantity: {:.4} over {} positions, {} realized lots",
            self.instrument,
            self.policy,
            self.open_quantity(),
            self.open_positions.len(),
            self.realized.len()
        )
    }
}
