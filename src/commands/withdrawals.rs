// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{WithdrawEntry, WithdrawKind};
use crate::store::{self, BillFile};
use crate::utils::{fmt_money, maybe_print_json, parse_amount, pretty_table, totals_line};
use anyhow::{anyhow, Result};
use serde::Serialize;

pub fn handle(state: &mut BillFile, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(state, sub)?,
        Some(("update", sub)) => update(state, sub)?,
        Some(("remove", sub)) => remove(state, sub)?,
        Some(("list", sub)) => list(state, sub)?,
        _ => {}
    }
    Ok(())
}

fn parse_kind(sub: &clap::ArgMatches) -> Result<WithdrawKind> {
    let raw = sub.get_one::<String>("kind").unwrap();
    WithdrawKind::parse(raw).ok_or_else(|| anyhow!("Unknown withdrawal category '{}'", raw))
}

fn add(state: &mut BillFile, sub: &clap::ArgMatches) -> Result<()> {
    let kind = parse_kind(sub)?;
    let name = sub.get_one::<String>("name").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount"))?;

    let entry = WithdrawEntry::new(name, amount);
    let id = entry.id.clone();
    let totals = state.bill.add_withdrawal(kind, entry);
    store::save(state)?;

    println!(
        "Recorded {} of {} from '{}' (id: {})",
        kind.label(),
        fmt_money(&amount, &state.config.currency_symbol),
        name,
        id
    );
    println!("{}", totals_line(&totals, &state.config.currency_symbol));
    Ok(())
}

fn update(state: &mut BillFile, sub: &clap::ArgMatches) -> Result<()> {
    let kind = parse_kind(sub)?;
    let id = sub.get_one::<String>("id").unwrap();
    let name = sub.get_one::<String>("name").map(|s| s.as_str());
    let amount = match sub.get_one::<String>("amount") {
        Some(raw) => Some(parse_amount(Some(raw))?),
        None => None,
    };

    let totals = state
        .bill
        .update_withdrawal(kind, id, name, amount)
        .ok_or_else(|| anyhow!("No {} entry with id '{}'", kind.label(), id))?;
    store::save(state)?;

    println!("Updated entry {}", id);
    println!("{}", totals_line(&totals, &state.config.currency_symbol));
    Ok(())
}

fn remove(state: &mut BillFile, sub: &clap::ArgMatches) -> Result<()> {
    let kind = parse_kind(sub)?;
    let id = sub.get_one::<String>("id").unwrap();

    let totals = state
        .bill
        .remove_withdrawal(kind, id)
        .ok_or_else(|| anyhow!("No {} entry with id '{}'", kind.label(), id))?;
    store::save(state)?;

    println!("Removed entry {}", id);
    println!("{}", totals_line(&totals, &state.config.currency_symbol));
    Ok(())
}

#[derive(Serialize)]
pub struct WithdrawRow {
    pub category: String,
    pub id: String,
    pub name: String,
    pub amount: String,
}

fn list(state: &BillFile, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut data = Vec::new();
    let mut rows = Vec::new();
    for kind in WithdrawKind::ALL {
        for entry in state.bill.withdrawals(kind) {
            data.push(WithdrawRow {
                category: kind.table_header().to_string(),
                id: entry.id.clone(),
                name: entry.name.clone(),
                amount: entry.amount.to_string(),
            });
            rows.push(vec![
                kind.table_header().to_string(),
                entry.id.clone(),
                entry.name.clone(),
                fmt_money(&entry.amount, &state.config.currency_symbol),
            ]);
        }
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(&["Category", "ID", "Name", "Amount"], rows)
        );
    }
    Ok(())
}
