// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{Local, NaiveDate, Utc};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::totals::calculate_totals;

/// Short-form code -> meaning, shown as the reference legend on the bill and
/// offered as cost-head choices. Single source for both consumers.
pub const SHORT_FORM_CODES: &[(&str, &str)] = &[
    ("IH", "In House"),
    ("P", "Personal"),
    ("OFC", "Office"),
    ("PO", "Parcel for Office"),
    ("PH", "Parcel for Home"),
    ("BP", "Business Promotional"),
];

/// Cost-head choices are the meanings of the short-form table, derived once so
/// the option list and the printed legend cannot drift apart.
pub static COST_HEAD_OPTIONS: Lazy<Vec<&'static str>> =
    Lazy::new(|| SHORT_FORM_CODES.iter().map(|(_, meaning)| *meaning).collect());

pub const REMARKS_OPTIONS: &[&str] = &[
    "Urgent",
    "Monthly",
    "Official",
    "Miscellaneous",
    "Transport",
    "Food",
    "Utilities",
    "Rent",
    "Office Supplies",
];

pub const BANK_SUGGESTIONS: &[&str] = &[
    "DBBL",
    "City Bank",
    "BRAC Bank",
    "Islami Bank",
    "Sonali Bank",
    "Eastern Bank",
];

pub const CREDIT_CARD_SUGGESTIONS: &[&str] = &[
    "DBBL Visa",
    "City Amex",
    "Standard Chartered Visa",
    "BRAC Bank Mastercard",
];

pub const DEFAULT_HOLDER: &str = "Homayra Mostofa (CEO)";

static ID_SEQ: AtomicU64 = AtomicU64::new(0);

fn to_base36(mut n: u64) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut buf = Vec::new();
    while n > 0 {
        buf.push(DIGITS[(n % 36) as usize] as char);
        n /= 36;
    }
    buf.into_iter().rev().collect()
}

/// Opaque entry id: wall-clock millis plus a process-local sequence, base-36.
pub fn generate_id() -> String {
    let millis = Utc::now().timestamp_millis().max(0) as u64;
    let seq = ID_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}", to_base36(millis), to_base36(seq))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawKind {
    Bank,
    CreditCard,
    BkashNagad,
}

impl WithdrawKind {
    pub const ALL: [WithdrawKind; 3] = [
        WithdrawKind::Bank,
        WithdrawKind::CreditCard,
        WithdrawKind::BkashNagad,
    ];

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "bank" => Some(WithdrawKind::Bank),
            "credit-card" => Some(WithdrawKind::CreditCard),
            "bkash-nagad" => Some(WithdrawKind::BkashNagad),
            _ => None,
        }
    }

    /// Column header used for the source label on the printed bill.
    pub fn table_header(&self) -> &'static str {
        match self {
            WithdrawKind::Bank => "Bank Name",
            WithdrawKind::CreditCard => "Credit Card",
            WithdrawKind::BkashNagad => "Bkash/Nagad",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WithdrawKind::Bank => "Bank Withdrawals",
            WithdrawKind::CreditCard => "Credit Card Withdrawals",
            WithdrawKind::BkashNagad => "Bkash/Nagad Withdrawals",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WithdrawEntry {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
}

impl WithdrawEntry {
    pub fn new(name: &str, amount: Decimal) -> Self {
        Self {
            id: generate_id(),
            name: name.to_string(),
            amount,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostEntry {
    pub id: String,
    pub cost_head: String,
    pub description: String,
    pub amount: Decimal,
    pub remarks: String,
}

impl CostEntry {
    pub fn new(cost_head: &str, description: &str, amount: Decimal, remarks: &str) -> Self {
        Self {
            id: generate_id(),
            cost_head: cost_head.to_string(),
            description: description.to_string(),
            amount,
            remarks: remarks.to_string(),
        }
    }
}

/// The complete form state for one bill. Single source of truth; totals are
/// always derived from it, never stored alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VouchingBill {
    pub name: String,
    pub date: NaiveDate,
    pub bank_withdrawals: Vec<WithdrawEntry>,
    pub credit_card_withdrawals: Vec<WithdrawEntry>,
    pub bkash_nagad_withdrawals: Vec<WithdrawEntry>,
    pub cost_entries: Vec<CostEntry>,
    pub due_from: String,
    pub payable_to: String,
    pub charity: String,
    pub cash_in_bkash_nagad: Decimal,
}

impl Default for VouchingBill {
    fn default() -> Self {
        Self {
            name: DEFAULT_HOLDER.to_string(),
            date: Local::now().date_naive(),
            bank_withdrawals: Vec::new(),
            credit_card_withdrawals: Vec::new(),
            bkash_nagad_withdrawals: Vec::new(),
            cost_entries: Vec::new(),
            due_from: String::new(),
            payable_to: String::new(),
            charity: String::new(),
            cash_in_bkash_nagad: Decimal::ZERO,
        }
    }
}

impl VouchingBill {
    pub fn withdrawals(&self, kind: WithdrawKind) -> &[WithdrawEntry] {
        match kind {
            WithdrawKind::Bank => &self.bank_withdrawals,
            WithdrawKind::CreditCard => &self.credit_card_withdrawals,
            WithdrawKind::BkashNagad => &self.bkash_nagad_withdrawals,
        }
    }

    fn withdrawals_mut(&mut self, kind: WithdrawKind) -> &mut Vec<WithdrawEntry> {
        match kind {
            WithdrawKind::Bank => &mut self.bank_withdrawals,
            WithdrawKind::CreditCard => &mut self.credit_card_withdrawals,
            WithdrawKind::BkashNagad => &mut self.bkash_nagad_withdrawals,
        }
    }

    pub fn totals(&self) -> BillTotals {
        calculate_totals(self)
    }

    // Every mutating operation returns the freshly recomputed totals so the
    // caller never reads a stale summary.

    pub fn add_withdrawal(&mut self, kind: WithdrawKind, entry: WithdrawEntry) -> BillTotals {
        self.withdrawals_mut(kind).push(entry);
        self.totals()
    }

    pub fn update_withdrawal(
        &mut self,
        kind: WithdrawKind,
        id: &str,
        name: Option<&str>,
        amount: Option<Decimal>,
    ) -> Option<BillTotals> {
        let entry = self.withdrawals_mut(kind).iter_mut().find(|e| e.id == id)?;
        if let Some(n) = name {
            entry.name = n.to_string();
        }
        if let Some(a) = amount {
            entry.amount = a;
        }
        Some(self.totals())
    }

    pub fn remove_withdrawal(&mut self, kind: WithdrawKind, id: &str) -> Option<BillTotals> {
        let list = self.withdrawals_mut(kind);
        let pos = list.iter().position(|e| e.id == id)?;
        list.remove(pos);
        Some(self.totals())
    }

    pub fn add_cost_entry(&mut self, entry: CostEntry) -> BillTotals {
        self.cost_entries.push(entry);
        self.totals()
    }

    pub fn update_cost_entry(
        &mut self,
        id: &str,
        cost_head: Option<&str>,
        description: Option<&str>,
        amount: Option<Decimal>,
        remarks: Option<&str>,
    ) -> Option<BillTotals> {
        let entry = self.cost_entries.iter_mut().find(|e| e.id == id)?;
        if let Some(h) = cost_head {
            entry.cost_head = h.to_string();
        }
        if let Some(d) = description {
            entry.description = d.to_string();
        }
        if let Some(a) = amount {
            entry.amount = a;
        }
        if let Some(r) = remarks {
            entry.remarks = r.to_string();
        }
        Some(self.totals())
    }

    pub fn remove_cost_entry(&mut self, id: &str) -> Option<BillTotals> {
        let pos = self.cost_entries.iter().position(|e| e.id == id)?;
        self.cost_entries.remove(pos);
        Some(self.totals())
    }

    pub fn set_name(&mut self, name: &str) -> BillTotals {
        self.name = name.to_string();
        self.totals()
    }

    pub fn set_date(&mut self, date: NaiveDate) -> BillTotals {
        self.date = date;
        self.totals()
    }

    pub fn set_due_from(&mut self, value: &str) -> BillTotals {
        self.due_from = value.to_string();
        self.totals()
    }

    pub fn set_payable_to(&mut self, value: &str) -> BillTotals {
        self.payable_to = value.to_string();
        self.totals()
    }

    pub fn set_charity(&mut self, value: &str) -> BillTotals {
        self.charity = value.to_string();
        self.totals()
    }

    pub fn set_cash_in_bkash_nagad(&mut self, value: Decimal) -> BillTotals {
        self.cash_in_bkash_nagad = value;
        self.totals()
    }
}

/// Derived aggregate for one bill. `cash_in_bkash_nagad` is copied from the
/// manually entered field, not computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillTotals {
    pub total_received: Decimal,
    pub total_cost: Decimal,
    pub cash_in_hand: Decimal,
    pub cash_in_bkash_nagad: Decimal,
}

/// Letterhead and currency display settings, stored with the bill.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillConfig {
    pub org_name: String,
    pub org_subtitle: String,
    pub currency_symbol: String,
}

impl Default for BillConfig {
    fn default() -> Self {
        Self {
            org_name: "SOHANI'S INTERIOR DESIGN & CONSTRUCTION".to_string(),
            org_subtitle: "(SiD&C)".to_string(),
            currency_symbol: "\u{09f3}".to_string(),
        }
    }
}
