// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::{Decimal, RoundingStrategy};

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn parse_decimal(s: &str) -> Result<Decimal> {
    s.parse::<Decimal>()
        .with_context(|| format!("Invalid decimal '{}'", s))
}

/// Parse a user-entered amount. Blank or missing input counts as zero;
/// negative amounts are rejected before they reach the bill.
pub fn parse_amount(s: Option<&String>) -> Result<Decimal> {
    let raw = match s {
        Some(v) if !v.trim().is_empty() => v.trim(),
        _ => return Ok(Decimal::ZERO),
    };
    let d = parse_decimal(raw)?;
    if d.is_sign_negative() {
        anyhow::bail!("Amount '{}' must not be negative", raw);
    }
    Ok(d)
}

// en-BD digit grouping: last three digits, then pairs (1,23,456).
fn group_digits_bd(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut pairs = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (h, pair) = rest.split_at(rest.len() - 2);
        pairs.push(pair);
        rest = h;
    }
    pairs.push(rest);
    pairs.reverse();
    format!("{},{}", pairs.join(","), tail)
}

/// Format a currency value for display: configured symbol, zero decimal
/// places, Bangladeshi digit grouping.
pub fn fmt_money(d: &Decimal, symbol: &str) -> String {
    let rounded = d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}{}{}", sign, symbol, group_digits_bd(&rounded.abs().to_string()))
}

/// One-line totals readout printed after every mutating command.
pub fn totals_line(t: &crate::models::BillTotals, symbol: &str) -> String {
    format!(
        "Received {} | Cost {} | Cash in hand {} | Bkash/Nagad {}",
        fmt_money(&t.total_received, symbol),
        fmt_money(&t.total_cost, symbol),
        fmt_money(&t.cash_in_hand, symbol),
        fmt_money(&t.cash_in_bkash_nagad, symbol)
    )
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        println!("{}", serde_json::to_string_pretty(v)?);
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                println!("{}", serde_json::to_string(item)?);
            }
        } else {
            println!("{}", serde_json::to_string(&val)?);
        }
        return Ok(true);
    }
    Ok(false)
}
