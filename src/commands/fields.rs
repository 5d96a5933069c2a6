// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::{self, BillFile};
use crate::utils::{parse_amount, parse_date, totals_line};
use anyhow::Result;

pub fn handle(state: &mut BillFile, m: &clap::ArgMatches) -> Result<()> {
    let (field, sub) = match m.subcommand() {
        Some(pair) => pair,
        None => return Ok(()),
    };
    let value = sub.get_one::<String>("value").unwrap();

    let totals = match field {
        "name" => Some(state.bill.set_name(value)),
        "date" => Some(state.bill.set_date(parse_date(value)?)),
        "due-from" => Some(state.bill.set_due_from(value)),
        "payable-to" => Some(state.bill.set_payable_to(value)),
        "charity" => Some(state.bill.set_charity(value)),
        "cash-in-bkash-nagad" => {
            Some(state.bill.set_cash_in_bkash_nagad(parse_amount(Some(value))?))
        }
        // letterhead settings carry no totals impact
        "org-name" => {
            state.config.org_name = value.to_string();
            None
        }
        "org-subtitle" => {
            state.config.org_subtitle = value.to_string();
            None
        }
        "currency-symbol" => {
            state.config.currency_symbol = value.to_string();
            None
        }
        _ => return Ok(()),
    };

    store::save(state)?;
    println!("Set {} to '{}'", field, value);
    if let Some(t) = totals {
        println!("{}", totals_line(&t, &state.config.currency_symbol));
    }
    Ok(())
}
