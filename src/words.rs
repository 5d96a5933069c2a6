// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Sentinel returned for magnitudes the conversion cannot represent. Callers
/// always receive a printable string, never an error.
pub const INVALID_AMOUNT: &str = "Invalid Amount";

const CURRENCY_SUFFIX: &str = "Taka Only";

// Short scale; one quadrillion and above reports the sentinel.
const MAX_SUPPORTED: u64 = 1_000_000_000_000_000;

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 5] = ["", "thousand", "million", "billion", "trillion"];

fn triple(n: u32) -> String {
    let mut parts = Vec::new();
    let hundreds = n / 100;
    let rest = n % 100;
    if hundreds > 0 {
        parts.push(format!("{} hundred", ONES[hundreds as usize]));
    }
    if rest >= 20 {
        let tens = TENS[(rest / 10) as usize];
        if rest % 10 == 0 {
            parts.push(tens.to_string());
        } else {
            parts.push(format!("{}-{}", tens, ONES[(rest % 10) as usize]));
        }
    } else if rest > 0 {
        parts.push(ONES[rest as usize].to_string());
    }
    parts.join(" ")
}

fn cardinal(n: u64) -> String {
    if n == 0 {
        return ONES[0].to_string();
    }
    // groups of a thousand, least significant first
    let mut groups = Vec::new();
    let mut rest = n;
    while rest > 0 {
        groups.push((rest % 1000) as u32);
        rest /= 1000;
    }
    let mut parts = Vec::new();
    for (scale, group) in groups.iter().enumerate().rev() {
        if *group == 0 {
            continue;
        }
        let mut words = triple(*group);
        if scale > 0 {
            words.push(' ');
            words.push_str(SCALES[scale]);
        }
        parts.push(words);
    }
    parts.join(" ")
}

/// Spell out a bill total: the integer part of the absolute value in English
/// words, first letter capitalized, suffixed with the currency name. Exactly
/// zero short-circuits to the fixed phrase; anything unrepresentable yields
/// [`INVALID_AMOUNT`] instead of an error.
pub fn convert_to_words(amount: Decimal) -> String {
    if amount.is_zero() {
        return format!("Zero {}", CURRENCY_SUFFIX);
    }
    let magnitude = match amount.abs().trunc().to_u64() {
        Some(n) if n < MAX_SUPPORTED => n,
        _ => return INVALID_AMOUNT.to_string(),
    };
    let words = cardinal(magnitude);
    let mut chars = words.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => return INVALID_AMOUNT.to_string(),
    };
    format!("{} {}", capitalized, CURRENCY_SUFFIX)
}
