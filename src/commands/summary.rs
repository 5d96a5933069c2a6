// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::WithdrawKind;
use crate::store::BillFile;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use crate::words::convert_to_words;
use anyhow::Result;
use serde_json::json;

pub fn handle(state: &BillFile, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let totals = state.bill.totals();
    let payload = json!({ "bill": state.bill, "totals": totals });
    if maybe_print_json(json_flag, jsonl_flag, &payload)? {
        return Ok(());
    }

    let sym = &state.config.currency_symbol;

    println!("{} {}", state.config.org_name, state.config.org_subtitle);
    println!("Vouching & Non-Vouching Bill");
    println!("Name: {}    Date: {}", state.bill.name, state.bill.date);
    println!();

    for kind in WithdrawKind::ALL {
        let entries = state.bill.withdrawals(kind);
        if entries.is_empty() {
            continue;
        }
        let rows: Vec<Vec<String>> = entries
            .iter()
            .map(|e| vec![e.name.clone(), fmt_money(&e.amount, sym)])
            .collect();
        println!("{}", pretty_table(&[kind.table_header(), "Amount"], rows));
    }

    if !state.bill.cost_entries.is_empty() {
        let rows: Vec<Vec<String>> = state
            .bill
            .cost_entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                vec![
                    format!("{:02}", i + 1),
                    e.cost_head.clone(),
                    e.description.clone(),
                    fmt_money(&e.amount, sym),
                    e.remarks.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Sl No", "Cost Head", "Description", "Amount", "Remarks"],
                rows,
            )
        );
    }

    let totals_rows = vec![
        vec!["Total Received".to_string(), fmt_money(&totals.total_received, sym)],
        vec!["Total Cost".to_string(), fmt_money(&totals.total_cost, sym)],
        vec!["Cash in Hand".to_string(), fmt_money(&totals.cash_in_hand, sym)],
        vec![
            "Cash in Bkash/Nagad".to_string(),
            fmt_money(&totals.cash_in_bkash_nagad, sym),
        ],
    ];
    println!("{}", pretty_table(&["Summary", "Amount"], totals_rows));
    println!("Amount in Words: {}", convert_to_words(totals.total_received));

    if !state.bill.due_from.trim().is_empty() {
        println!("Due From: {}", state.bill.due_from);
    }
    if !state.bill.payable_to.trim().is_empty() {
        println!("Payable To: {}", state.bill.payable_to);
    }
    if !state.bill.charity.trim().is_empty() {
        println!("Charity: {}", state.bill.charity);
    }
    Ok(())
}
