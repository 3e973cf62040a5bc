//! Lotmatch pairs the buy and sell trades of a single instrument into
//! realized capital-gains lots under a FIFO or LIFO matching policy.
//!
//! - `LotMatcher` - owns one instrument's trade history, the queue of open
//!     positions, and the ledger of realized lots
//! - `Trade` - one signed-quantity buy or sell
//! - `RealizedLot` - a matched opening/closing pair, captures gain/loss and
//!     holding period
//!
//! Quantities and prices use `rust_decimal::Decimal`, so a position split
//! across many fractional closes always nets to exactly zero.
//!
//! Example
//! ```
//! use lotmatch::matcher::LotMatcher;
//! use lotmatch::policy::MatchPolicy;
//! use lotmatch::realized::RealizedLot;
//! use lotmatch::trade::Trade;
//!
//! let mut matcher = LotMatcher::new("BTC", MatchPolicy::Fifo);
//! matcher.add_trade(Trade::from("BTC,1,10000,2020-05-10")).unwrap();
//! let lots = matcher.add_trade(Trade::from("BTC,-0.5,11000,2020-05-11")).unwrap();
//!
//! // in the form of instrument, quantity, open price, open date, close price, close date
//! assert_eq!(
//!     lots,
//!     vec![RealizedLot::from("BTC,0.5,10000,2020-05-10,11000,2020-05-11")]
//! );
//!
//! // remaining open position left in the queue
//! assert_eq!(
//!     matcher.open_positions(),
//!     vec![Trade::from("BTC,0.5,10000,2020-05-10")]
//! );
//! ```
//!
//! Look also in the demos directory for a financial-year report over a
//! broker CSV export.

/// Holding period, in months, beyond which a realized lot is discount-eligible.
pub const DISCOUNT_HOLDING_MONTHS: u32 = 12;

/// error type returned when a trade cannot be added or matched
pub mod error;
/// struct and functions dealing with a `LotMatcher`
pub mod matcher;
/// FIFO/LIFO selection and short/long term classification enums
pub mod policy;
/// struct and functions related to `RealizedLot` - realized gains/losses
pub mod realized;
/// defined `Trade` struct used for inventory changes in a single instrument
pub mod trade;
