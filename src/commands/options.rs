// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{
    BANK_SUGGESTIONS, COST_HEAD_OPTIONS, CREDIT_CARD_SUGGESTIONS, REMARKS_OPTIONS,
    SHORT_FORM_CODES,
};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use serde_json::json;

/// The fixed reference table and option lists, exactly as the renderer and
/// the input widgets consume them.
pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");

    let payload = json!({
        "short_form_codes": SHORT_FORM_CODES
            .iter()
            .map(|(code, meaning)| json!({ "code": code, "meaning": meaning }))
            .collect::<Vec<_>>(),
        "cost_head_options": &*COST_HEAD_OPTIONS,
        "remarks_options": REMARKS_OPTIONS,
        "bank_suggestions": BANK_SUGGESTIONS,
        "credit_card_suggestions": CREDIT_CARD_SUGGESTIONS,
    });
    if maybe_print_json(json_flag, jsonl_flag, &payload)? {
        return Ok(());
    }

    let rows: Vec<Vec<String>> = SHORT_FORM_CODES
        .iter()
        .map(|(code, meaning)| vec![code.to_string(), meaning.to_string()])
        .collect();
    println!("{}", pretty_table(&["Code", "Meaning"], rows));
    println!("Cost heads: {}", COST_HEAD_OPTIONS.join(", "));
    println!("Remarks: {}", REMARKS_OPTIONS.join(", "));
    println!("Bank suggestions: {}", BANK_SUGGESTIONS.join(", "));
    println!("Credit card suggestions: {}", CREDIT_CARD_SUGGESTIONS.join(", "));
    Ok(())
}
