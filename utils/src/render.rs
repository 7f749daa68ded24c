//! Number and timestamp rendering shared by all message builders.
//!
//! Scale conventions: percentage helpers take fractions (0-1) and scale
//! once here; callers convert provider values to fractions at ingestion.

use chrono::Utc;

use crate::series::Delta;

/// Placeholder for metrics with no data behind them.
pub const NO_DATA: &str = "N/A";

/// Monetary amount: thousands separators, exactly 2 decimal digits.
pub fn format_money(value: f64) -> String {
    let negative = value < 0.0;
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// Unit price: `$` prefix, 4 decimal digits.
pub fn format_price(value: f64) -> String {
    format!("${:.4}", value)
}

/// Percentage from a fraction: 2 decimal digits, trailing `%`.
pub fn format_pct(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Like [`format_pct`], rendering `None` as the no-data placeholder.
pub fn format_pct_opt(fraction: Option<f64>) -> String {
    fraction.map(format_pct).unwrap_or_else(|| NO_DATA.to_string())
}

/// Peg deviation of a price from 1.0, in basis points: explicit sign,
/// 1 decimal digit, `bps` suffix.
pub fn format_bps(price: f64) -> String {
    format!("{:+.1} bps", (price - 1.0) * 10_000.0)
}

/// Window change: signed amount plus signed relative percentage, or the
/// no-data placeholder.
pub fn format_delta(delta: Option<Delta>) -> String {
    match delta {
        None => NO_DATA.to_string(),
        Some(d) => {
            let amount_sign = if d.absolute < 0.0 { "-" } else { "+" };
            let pct_sign = if d.relative < 0.0 { "-" } else { "+" };
            format!(
                "{}{} ({}{:.2}%)",
                amount_sign,
                format_money(d.absolute.abs()),
                pct_sign,
                d.relative.abs() * 100.0
            )
        }
    }
}

/// Current time as `YYYY-MM-DD HH:MM UTC`, appended to every message.
pub fn utc_stamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M UTC").to_string()
}
