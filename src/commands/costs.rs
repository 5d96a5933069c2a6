// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::CostEntry;
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

fn add(state: &mut BillFile, sub: &clap::ArgMatches) -> Result<()> {
    let head = sub.get_one::<String>("head").unwrap();
    let description = sub.get_one::<String>("description").unwrap();
    let amount = parse_amount(sub.get_one::<String>("amount"))?;
    let remarks = sub.get_one::<String>("remarks").map(|s| s.as_str()).unwrap_or("");

    let entry = CostEntry::new(head, description, amount, remarks);
    let id = entry.id.clone();
    let totals = state.bill.add_cost_entry(entry);
    store::save(state)?;

    println!(
        "Recorded cost of {} under '{}' (id: {})",
        fmt_money(&amount, &state.config.currency_symbol),
        head,
        id
    );
    println!("{}", totals_line(&totals, &state.config.currency_symbol));
    Ok(())
}

fn update(state: &mut BillFile, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();
    let head = sub.get_one::<String>("head").map(|s| s.as_str());
    let description = sub.get_one::<String>("description").map(|s| s.as_str());
    let remarks = sub.get_one::<String>("remarks").map(|s| s.as_str());
    let amount = match sub.get_one::<String>("amount") {
        Some(raw) => Some(parse_amount(Some(raw))?),
        None => None,
    };

    let totals = state
        .bill
        .update_cost_entry(id, head, description, amount, remarks)
        .ok_or_else(|| anyhow!("No cost entry with id '{}'", id))?;
    store::save(state)?;

    println!("Updated cost entry {}", id);
    println!("{}", totals_line(&totals, &state.config.currency_symbol));
    Ok(())
}

fn remove(state: &mut BillFile, sub: &clap::ArgMatches) -> Result<()> {
    let id = sub.get_one::<String>("id").unwrap();

    let totals = state
        .bill
        .remove_cost_entry(id)
        .ok_or_else(|| anyhow!("No cost entry with id '{}'", id))?;
    store::save(state)?;

    println!("Removed cost entry {}", id);
    println!("{}", totals_line(&totals, &state.config.currency_symbol));
    Ok(())
}

#[derive(Serialize)]
pub struct CostRow {
    pub sl_no: String,
    pub id: String,
    pub cost_head: String,
    pub description: String,
    pub amount: String,
    pub remarks: String,
}

fn list(state: &BillFile, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let mut data = Vec::new();
    let mut rows = Vec::new();
    for (i, entry) in state.bill.cost_entries.iter().enumerate() {
        let sl_no = format!("{:02}", i + 1);
        data.push(CostRow {
            sl_no: sl_no.clone(),
            id: entry.id.clone(),
            cost_head: entry.cost_head.clone(),
            description: entry.description.clone(),
            amount: entry.amount.to_string(),
            remarks: entry.remarks.clone(),
        });
        rows.push(vec![
            sl_no,
            entry.id.clone(),
            entry.cost_head.clone(),
            entry.description.clone(),
            fmt_money(&entry.amount, &state.config.currency_symbol),
            entry.remarks.clone(),
        ]);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!(
            "{}",
            pretty_table(
                &["Sl", "ID", "Cost Head", "Description", "Amount", "Remarks"],
                rows,
            )
        );
    }
    Ok(())
}
