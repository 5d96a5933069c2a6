// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::pdf;
use crate::store::BillFile;
use anyhow::Result;
use serde_json::json;
use std::path::PathBuf;

pub fn handle(state: &BillFile, m: &clap::ArgMatches) -> Result<()> {
    let fmt = m.get_one::<String>("format").unwrap().to_lowercase();
    let out_dir = PathBuf::from(m.get_one::<String>("out").unwrap());
    let totals = state.bill.totals();

    match fmt.as_str() {
        "pdf" => {
            let path = pdf::export_pdf(&state.bill, &totals, &state.config, &out_dir)?;
            println!("Exported bill to {}", path.display());
        }
        "csv" => {
            let path = out_dir.join(pdf::export_file_name(&state.bill, "csv"));
            let mut wtr = csv::Writer::from_path(&path)?;
            wtr.write_record(["sl_no", "cost_head", "description", "amount", "remarks"])?;
            for (i, e) in state.bill.cost_entries.iter().enumerate() {
                wtr.write_record([
                    format!("{:02}", i + 1),
                    e.cost_head.clone(),
                    e.description.clone(),
                    e.amount.to_string(),
                    e.remarks.clone(),
                ])?;
            }
            wtr.flush()?;
            println!("Exported cost entries to {}", path.display());
        }
        "json" => {
            let path = out_dir.join(pdf::export_file_name(&state.bill, "json"));
            let payload = json!({ "bill": state.bill, "totals": totals });
            std::fs::write(&path, serde_json::to_string_pretty(&payload)?)?;
            println!("Exported bill to {}", path.display());
        }
        _ => {
            anyhow::bail!("Unknown format: {} (use pdf|csv|json)", fmt);
        }
    }
    Ok(())
}
