// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use vouchbill::models::{CostEntry, VouchingBill, WithdrawEntry, WithdrawKind};
use vouchbill::totals::calculate_totals;
use vouchbill::utils::{fmt_money, parse_amount};

fn bill() -> VouchingBill {
    VouchingBill::default()
}

#[test]
fn total_received_sums_all_three_categories() {
    let mut b = bill();
    b.bank_withdrawals
        .push(WithdrawEntry::new("DBBL", Decimal::from(1000)));
    b.bank_withdrawals
        .push(WithdrawEntry::new("City Bank", Decimal::from(2000)));
    b.credit_card_withdrawals
        .push(WithdrawEntry::new("DBBL Visa", Decimal::from(500)));
    b.bkash_nagad_withdrawals
        .push(WithdrawEntry::new("Bkash 017", Decimal::from(250)));

    let t = calculate_totals(&b);
    assert_eq!(t.total_received, Decimal::from(3750));
    assert_eq!(t.total_cost, Decimal::ZERO);
    assert_eq!(t.cash_in_hand, Decimal::from(3750));
}

#[test]
fn cash_in_hand_can_go_negative() {
    let mut b = bill();
    b.bank_withdrawals
        .push(WithdrawEntry::new("DBBL", Decimal::from(100)));
    b.cost_entries
        .push(CostEntry::new("Office", "Chairs", Decimal::from(250), "Urgent"));

    let t = calculate_totals(&b);
    // 100 - 250 = -150, reported exactly
    assert_eq!(t.cash_in_hand, Decimal::from(-150));
}

#[test]
fn cash_in_bkash_nagad_passes_through_unchanged() {
    let mut b = bill();
    b.cash_in_bkash_nagad = Decimal::from(777);
    b.bank_withdrawals
        .push(WithdrawEntry::new("DBBL", Decimal::from(9999)));
    b.cost_entries
        .push(CostEntry::new("Personal", "Gift", Decimal::from(42), ""));

    let t = calculate_totals(&b);
    assert_eq!(t.cash_in_bkash_nagad, Decimal::from(777));
}

#[test]
fn totals_computation_is_idempotent() {
    let mut b = bill();
    b.bank_withdrawals
        .push(WithdrawEntry::new("DBBL", Decimal::from(123)));
    b.cost_entries
        .push(CostEntry::new("Office", "Paper", Decimal::from(23), "Monthly"));

    let first = calculate_totals(&b);
    let second = calculate_totals(&b);
    assert_eq!(first, second);
}

#[test]
fn blank_amounts_count_as_zero() {
    assert_eq!(parse_amount(None).unwrap(), Decimal::ZERO);
    assert_eq!(parse_amount(Some(&"".to_string())).unwrap(), Decimal::ZERO);
    assert_eq!(parse_amount(Some(&"   ".to_string())).unwrap(), Decimal::ZERO);
    assert!(parse_amount(Some(&"-5".to_string())).is_err());
    assert!(parse_amount(Some(&"abc".to_string())).is_err());
}

#[test]
fn mutation_methods_return_fresh_totals() {
    let mut b = bill();
    let t = b.add_withdrawal(
        WithdrawKind::Bank,
        WithdrawEntry::new("DBBL", Decimal::from(500)),
    );
    assert_eq!(t.total_received, Decimal::from(500));

    let id = b.bank_withdrawals[0].id.clone();
    let t = b
        .update_withdrawal(WithdrawKind::Bank, &id, None, Some(Decimal::from(700)))
        .unwrap();
    assert_eq!(t.total_received, Decimal::from(700));

    assert!(b
        .update_withdrawal(WithdrawKind::Bank, "no-such-id", None, None)
        .is_none());
    assert!(b.remove_withdrawal(WithdrawKind::CreditCard, &id).is_none());

    let t = b.remove_withdrawal(WithdrawKind::Bank, &id).unwrap();
    assert_eq!(t.total_received, Decimal::ZERO);

    let t = b.set_cash_in_bkash_nagad(Decimal::from(300));
    assert_eq!(t.cash_in_bkash_nagad, Decimal::from(300));
}

#[test]
fn entry_order_is_insertion_order() {
    let mut b = bill();
    for n in ["first", "second", "third"] {
        b.add_cost_entry(CostEntry::new("Office", n, Decimal::ONE, ""));
    }
    let names: Vec<&str> = b.cost_entries.iter().map(|e| e.description.as_str()).collect();
    assert_eq!(names, ["first", "second", "third"]);
}

#[test]
fn end_to_end_scenario_from_the_form() {
    let mut b = bill();
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
    let t = b.set_cash_in_bkash_nagad(Decimal::from(300));

    assert_eq!(t.total_received, Decimal::from(5000));
    assert_eq!(t.total_cost, Decimal::from(1200));
    assert_eq!(t.cash_in_hand, Decimal::from(3800));
    assert_eq!(t.cash_in_bkash_nagad, Decimal::from(300));

    // zero decimal places, en-BD grouping, configured symbol
    assert_eq!(fmt_money(&t.total_received, "\u{09f3}"), "\u{09f3}5,000");
    assert_eq!(fmt_money(&t.cash_in_hand, "\u{09f3}"), "\u{09f3}3,800");
    assert_eq!(
        fmt_money(&Decimal::from(123456), "\u{09f3}"),
        "\u{09f3}1,23,456"
    );
    assert_eq!(fmt_money(&Decimal::from(-200), "\u{09f3}"), "-\u{09f3}200");
}
