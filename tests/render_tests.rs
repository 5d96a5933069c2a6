// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use vouchbill::models::{BillConfig, CostEntry, VouchingBill, WithdrawEntry, WithdrawKind};
use vouchbill::pdf::render_document;

fn base_bill() -> VouchingBill {
    let mut b = VouchingBill::default();
    b.name = "Homayra Mostofa (CEO)".to_string();
    b.date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
    b
}

fn sample_bill() -> VouchingBill {
    let mut b = base_bill();
    b.add_withdrawal(
        WithdrawKind::Bank,
        WithdrawEntry::new("DBBL", Decimal::from(5000)),
    );
    b.add_cost_entry(CostEntry::new(
        "OFC",
        "Supplies",
        Decimal::from(1200),
        "Official",
    ));
    b.set_cash_in_bkash_nagad(Decimal::from(300));
    b
}

#[test]
fn small_bill_fits_on_one_page() {
    let b = sample_bill();
    let doc = render_document(&b, &b.totals(), &BillConfig::default());
    assert_eq!(doc.pages.len(), 1);
}

#[test]
fn empty_categories_produce_no_table_section() {
    let b = sample_bill();
    let doc = render_document(&b, &b.totals(), &BillConfig::default());

    // bank table present, the other two absent entirely
    assert!(doc.texts().any(|t| t == "Bank Name"));
    assert!(!doc.texts().any(|t| t == "Credit Card"));
    assert!(!doc.texts().any(|t| t == "Bkash/Nagad"));
    // the heading itself is always printed
    assert!(doc.texts().any(|t| t == "Withdraw From:"));
}

#[test]
fn bill_with_no_bank_withdrawals_omits_bank_table() {
    let mut b = base_bill();
    b.add_withdrawal(
        WithdrawKind::CreditCard,
        WithdrawEntry::new("DBBL Visa", Decimal::from(100)),
    );
    let doc = render_document(&b, &b.totals(), &BillConfig::default());
    assert!(!doc.texts().any(|t| t == "Bank Name"));
    assert!(doc.texts().any(|t| t == "Credit Card"));
}

#[test]
fn cost_rows_are_sequenced_and_zero_padded() {
    let mut b = base_bill();
    for i in 0..11 {
        b.add_cost_entry(CostEntry::new(
            "Office",
            &format!("Item {}", i),
            Decimal::from(10),
            "Monthly",
        ));
    }
    let doc = render_document(&b, &b.totals(), &BillConfig::default());
    assert!(doc.texts().any(|t| t == "01"));
    assert!(doc.texts().any(|t| t == "11"));
    assert!(!doc.texts().any(|t| t == "12"));
}

#[test]
fn totals_block_shows_formatted_values() {
    let b = sample_bill();
    let doc = render_document(&b, &b.totals(), &BillConfig::default());

    assert!(doc.texts().any(|t| t == "Total Received"));
    assert!(doc.texts().any(|t| t == "\u{09f3}5,000"));
    assert!(doc.texts().any(|t| t == "\u{09f3}1,200"));
    assert!(doc.texts().any(|t| t == "\u{09f3}3,800"));
    assert!(doc.texts().any(|t| t == "\u{09f3}300"));
    assert!(doc.texts().any(|t| t == "Five thousand Taka Only"));
}

#[test]
fn words_failure_degrades_without_aborting_the_render() {
    let mut b = base_bill();
    b.add_withdrawal(
        WithdrawKind::Bank,
        WithdrawEntry::new("DBBL", Decimal::from(10_000_000_000_000_000u64)),
    );
    let doc = render_document(&b, &b.totals(), &BillConfig::default());

    assert!(doc.texts().any(|t| t == "Invalid Amount"));
    // the rest of the document still renders
    assert!(doc.texts().any(|t| t == "Checked by ACT"));
    assert!(doc.texts().any(|t| t == "Sign by CEO"));
}

#[test]
fn additional_summary_block_sizes_to_present_fields() {
    let mut b = sample_bill();
    let doc = render_document(&b, &b.totals(), &BillConfig::default());
    assert!(!doc.texts().any(|t| t == "Summary:"));

    b.set_due_from("Mr. Rahman");
    let doc = render_document(&b, &b.totals(), &BillConfig::default());
    assert!(doc.texts().any(|t| t == "Summary:"));
    assert!(doc.texts().any(|t| t == "Due From: Mr. Rahman"));
    assert!(!doc.texts().any(|t| t.starts_with("Payable To:")));
    assert!(!doc.texts().any(|t| t.starts_with("Charity:")));

    b.set_payable_to("Landlord");
    b.set_charity("500");
    let doc = render_document(&b, &b.totals(), &BillConfig::default());
    assert!(doc.texts().any(|t| t == "Payable To: Landlord"));
    assert!(doc.texts().any(|t| t == "Charity: 500"));
}

#[test]
fn long_cost_table_paginates_and_repeats_header() {
    let mut b = base_bill();
    for i in 0..80 {
        b.add_cost_entry(CostEntry::new(
            "Office",
            &format!("Line {}", i),
            Decimal::from(5),
            "",
        ));
    }
    let doc = render_document(&b, &b.totals(), &BillConfig::default());
    assert!(doc.pages.len() >= 2);

    let header_count = doc.texts().filter(|t| *t == "Sl No").count();
    assert!(header_count >= 2, "header repeated on continuation pages");

    // every sequence number made it onto some page
    assert!(doc.texts().any(|t| t == "80"));
}

#[test]
fn pdf_bytes_are_well_formed_and_transliterate_the_taka_sign() {
    let b = sample_bill();
    let doc = render_document(&b, &b.totals(), &BillConfig::default());
    let bytes = doc.to_pdf_bytes();

    assert!(bytes.starts_with(b"%PDF-1.4"));
    assert!(bytes.ends_with(b"%%EOF\n"));

    let contains = |needle: &[u8]| bytes.windows(needle.len()).any(|w| w == needle);
    assert!(contains(b"Vouching & Non-Vouching Bill"));
    assert!(contains(b"/BaseFont /Helvetica"));
    // U+09F3 has no WinAnsi code point; amounts appear as Tk in the artifact
    assert!(contains(b"Tk 5,000"));
    assert!(!String::from_utf8_lossy(&bytes).contains('\u{09f3}'));
}
