use chrono::NaiveDate;
use thiserror::Error;

/// Failures reported by [`LotMatcher::add_trade`](crate::matcher::LotMatcher::add_trade).
///
/// A failure part way through matching leaves the lots already realized by
/// that call in the ledger. Callers must not assume a failed call was atomic.
#[derive(Debug, Error, PartialEq)]
pub enum MatchError {
    /// The trade belongs to a different instrument than the matcher is bound to.
    /// The matcher's state is untouched.
    #[error("cannot add a {found} trade to a {expected} matcher")]
    InstrumentMismatch { expected: String, found: String },

    /// The closing trade's quantity exceeds the total open quantity.
    #[error("no more open positions for {instrument}")]
    InsufficientOpenPositions { instrument: String },

    /// The policy-selected open position is dated after the closing trade,
    /// so there is nothing the closing trade could legally consume.
    #[error("no open position for {instrument} dated on or before {trade_date}")]
    NoEligibleOpenPosition {
        instrument: String,
        trade_date: NaiveDate,
    },
}
