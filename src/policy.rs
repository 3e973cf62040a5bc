use serde::{Deserialize, Serialize};

/// Which end of the open-position queue a closing trade consumes first.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum MatchPolicy {
    /// Oldest open position first.
    Fifo,
    /// Newest open position first.
    Lifo,
}

impl std::str::FromStr for MatchPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fifo" | "FIFO" | "fifo" => Ok(MatchPolicy::Fifo),
            "Lifo" | "LIFO" | "lifo" => Ok(MatchPolicy::Lifo),
            _ => Err(format!("'{}' is not a valid value for MatchPolicy", s)),
        }
    }
}

/// Holding-period classification of a realized lot.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum GainTerm {
    /// Held no longer than the discount period, taxed at the full rate.
    ShortTerm,
    /// Held beyond the discount period, eligible for the discount rate.
    LongTerm,
}

impl std::str::FromStr for GainTerm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Short" | "ShortTerm" | "st" | "short" => Ok(GainTerm::ShortTerm),
            "Long" | "LongTerm" | "lt" | "long" => Ok(GainTerm::LongTerm),
            _ => Err(format!("'{}' is not a valid value for GainTerm", s)),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use std::str::FromStr;

    #[test]
    fn match_policy_from_str() {
        assert_eq!(MatchPolicy::from_str("fifo"), Ok(MatchPolicy::Fifo));
        assert_eq!(MatchPolicy::from_str("LIFO"), Ok(MatchPolicy::Lifo));
        assert!(MatchPolicy::from_str("avgcost").is_err());
    }

    #[test]
    fn gain_term_from_str() {
        assert_eq!(GainTerm::from_str("lt"), Ok(GainTerm::LongTerm));
        assert_eq!(GainTerm::from_str("Short"), Ok(GainTerm::ShortTerm));
        assert!(GainTerm::from_str("medium").is_err());
    }
}
