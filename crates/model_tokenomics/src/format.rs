//! Display helpers for token amounts and labels

use crate::math::{div_or_zero, round_cents};

/// Abbreviate a token count: `1.50B`, `2.00M`, `3.25K`, else two decimals
pub fn format_token_amount(value: f64) -> String {
    if value >= 1_000_000_000.0 {
        format!("{:.2}B", round_cents(value / 1_000_000_000.0))
    } else if value >= 1_000_000.0 {
        format!("{:.2}M", round_cents(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{:.2}K", round_cents(value / 1_000.0))
    } else {
        format!("{:.2}", round_cents(value))
    }
}

/// Tooltip pair `("<amount> (<share>%)", name)` for an unlock chart point.
///
/// A zero total supply renders a `0.00` share.
pub fn format_tooltip_value(value: f64, name: &str, total_supply: f64) -> (String, String) {
    let share = div_or_zero(value, total_supply) * 100.0;
    (
        format!("{} ({:.2}%)", format_token_amount(value), round_cents(share)),
        name.to_string(),
    )
}

/// `fundraisingMethod` -> `Fundraising Method`
pub fn readable_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for (i, ch) in key.chars().enumerate() {
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
    }
    out
}
