// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tempfile::tempdir;
use vouchbill::models::{CostEntry, VouchingBill, WithdrawEntry, WithdrawKind};
use vouchbill::store::BillFile;
use vouchbill::{cli, commands::exporter, pdf};

fn sample_state() -> BillFile {
    let mut state = BillFile::default();
    state.bill.name = "Homayra Mostofa (CEO)".to_string();
    state.bill.date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    state.bill.add_withdrawal(
        WithdrawKind::Bank,
        WithdrawEntry::new("DBBL", Decimal::from(5000)),
    );
    state.bill.add_cost_entry(CostEntry::new(
        "OFC",
        "Supplies",
        Decimal::from(1200),
        "Official",
    ));
    state.bill.set_cash_in_bkash_nagad(Decimal::from(300));
    state
}

#[test]
fn file_name_is_deterministic_and_filesystem_safe() {
    let state = sample_state();
    assert_eq!(
        pdf::export_file_name(&state.bill, "pdf"),
        "Vouching_Bill_Homayra_Mostofa_CEO_2025-08-01.pdf"
    );

    let mut odd = VouchingBill::default();
    odd.name = "  A/B: C  ".to_string();
    odd.date = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    assert_eq!(
        pdf::export_file_name(&odd, "json"),
        "Vouching_Bill_A_B_C_2025-01-02.json"
    );
}

#[test]
fn export_pdf_writes_one_complete_file() {
    let state = sample_state();
    let totals = state.bill.totals();
    let dir = tempdir().unwrap();

    let path = pdf::export_pdf(&state.bill, &totals, &state.config, dir.path()).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_string_lossy(),
        "Vouching_Bill_Homayra_Mostofa_CEO_2025-08-01.pdf"
    );

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert!(bytes.ends_with(b"%%EOF\n"));

    // no temp file left behind
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names.len(), 1);
}

#[test]
fn export_pdf_into_missing_directory_fails_without_partial_output() {
    let state = sample_state();
    let totals = state.bill.totals();
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");

    let result = pdf::export_pdf(&state.bill, &totals, &state.config, &missing);
    assert!(result.is_err());
    assert!(!missing.exists());
}

#[test]
fn cli_export_json_round_trips_bill_and_totals() {
    let state = sample_state();
    let dir = tempdir().unwrap();
    let out = dir.path().to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches =
        cli.get_matches_from(["vouchbill", "export", "--format", "json", "--out", &out]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&state, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let path = dir
        .path()
        .join("Vouching_Bill_Homayra_Mostofa_CEO_2025-08-01.json");
    let contents = std::fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();

    assert_eq!(parsed["bill"]["name"], "Homayra Mostofa (CEO)");
    assert_eq!(parsed["totals"]["total_received"], "5000");
    assert_eq!(parsed["totals"]["total_cost"], "1200");
    assert_eq!(parsed["totals"]["cash_in_hand"], "3800");
    assert_eq!(parsed["totals"]["cash_in_bkash_nagad"], "300");
}

#[test]
fn cli_export_csv_lists_cost_entries_in_order() {
    let state = sample_state();
    let dir = tempdir().unwrap();
    let out = dir.path().to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["vouchbill", "export", "--format", "csv", "--out", &out]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&state, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    let path = dir
        .path()
        .join("Vouching_Bill_Homayra_Mostofa_CEO_2025-08-01.csv");
    let contents = std::fs::read_to_string(&path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "sl_no,cost_head,description,amount,remarks"
    );
    assert_eq!(lines.next().unwrap(), "01,OFC,Supplies,1200,Official");
}

#[test]
fn cli_export_pdf_reports_the_written_path() {
    let state = sample_state();
    let dir = tempdir().unwrap();
    let out = dir.path().to_string_lossy().to_string();

    let cli = cli::build_cli();
    let matches = cli.get_matches_from(["vouchbill", "export", "--out", &out]);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(&state, export_m).unwrap();
    } else {
        panic!("no export subcommand");
    }

    // default format is pdf
    let path = dir
        .path()
        .join("Vouching_Bill_Homayra_Mostofa_CEO_2025-08-01.pdf");
    assert!(path.exists());
}
