// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::models::{BillTotals, VouchingBill, WithdrawEntry};

fn sum_withdrawals(entries: &[WithdrawEntry]) -> Decimal {
    entries
        .iter()
        .fold(Decimal::ZERO, |acc, entry| acc + entry.amount)
}

/// Derive the totals summary from a bill. Pure and O(n) over the entry count;
/// the input is never mutated, so calling it twice on an unchanged bill yields
/// identical results.
pub fn calculate_totals(bill: &VouchingBill) -> BillTotals {
    let total_received = sum_withdrawals(&bill.bank_withdrawals)
        + sum_withdrawals(&bill.credit_card_withdrawals)
        + sum_withdrawals(&bill.bkash_nagad_withdrawals);
    let total_cost = bill
        .cost_entries
        .iter()
        .fold(Decimal::ZERO, |acc, entry| acc + entry.amount);

    BillTotals {
        total_received,
        total_cost,
        cash_in_hand: total_received - total_cost,
        cash_in_bkash_nagad: bill.cash_in_bkash_nagad,
    }
}
