/// Financial-year capital gains report over a broker trade export.
///
/// The export is newest-first, one row per trade:
/// date, reference, details ("B 100 CBA @ 70.00" or "S 100 CBA @ 82.50").
/// Rows that are not buys or sells (dividends, fees) are skipped.
use chrono::NaiveDate;
use lotmatch::matcher::LotMatcher;
use lotmatch::policy::MatchPolicy;
use lotmatch::realized::{closed_between, split_by_term, total_gain};
use lotmatch::trade::Trade;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::error::Error;
use std::fs::File;
use std::io;
use std::io::BufRead;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let f = File::open("./demos/trades.csv")?;
    let trades = read_trades(f)?;

    println!("TRADES LOADED: {}", trades.len());

    let mut matchers: HashMap<String, LotMatcher> = HashMap::new();

    // file is newest-first, the matcher wants oldest-first
    for trade in trades.iter().rev() {
        let matcher = matchers
            .entry(trade.instrument.clone())
            .or_insert_with(|| LotMatcher::new(&trade.instrument, MatchPolicy::Fifo));
        matcher.add_trade(trade.clone())?;
    }

    let fy_start = NaiveDate::from_ymd_opt(2019, 7, 1).unwrap();
    let fy_end = NaiveDate::from_ymd_opt(2020, 6, 30).unwrap();

    println!("-------------------------------------------------------------");
    for (instrument, matcher) in matchers.iter() {
        println!("{}", matcher);
        let in_year = closed_between(matcher.realized_lots(), fy_start, fy_end);
        let (discount, non_discount) = split_by_term(&in_year);
        println!("{} CGT discount: ${:.2}", instrument, total_gain(&discount));
        println!(
            "{} non CGT discount: ${:.2}",
            instrument,
            total_gain(&non_discount)
        );
        for lot in in_year.iter() {
            println!("  {}", lot);
        }
        println!("-------------------------------------------------------------");
    }

    Ok(())
}

fn read_trades(f: File) -> Result<Vec<Trade>, Box<dyn Error>> {
    let details_re = Regex::new(r"(B|S) (\d+) (.*) @ (\d*\.\d*)")?;
    let mut trades = Vec::new();

    for line in io::BufReader::new(f).lines().skip(1) {
        let line = line?;
        let field: Vec<&str> = line.split(',').collect();
        if field.len() < 3 {
            continue;
        }
        let trade_date = match NaiveDate::parse_from_str(field[0], "%d/%m/%Y") {
            Ok(d) => d,
            Err(_) => continue,
        };
        let caps = match details_re.captures(field[2]) {
            Some(caps) => caps,
            None => continue,
        };
        let size: Decimal = caps[2].parse()?;
        let quantity = if &caps[1] == "B" { size } else { -size };
        trades.push(Trade::new(&caps[3], quantity, caps[4].parse()?, trade_date));
    }
    Ok(trades)
}
