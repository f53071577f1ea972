//! Presentation and export of allocation results.
//!
//! Rounding happens only here: currency to 2 decimal places, percentages to 4. Rounded values
//! are never fed back into the calculator.

pub mod csv;
pub mod text;

pub use csv::{CSV_HEADER, DEFAULT_CSV_FILE_NAME, to_owner_csv, write_owner_csv};
pub use text::render_text;

/// Decimal places for dollar amounts.
pub const CURRENCY_DECIMALS: i32 = 2;
/// Decimal places for MI/NRI percentages.
pub const PERCENT_DECIMALS: i32 = 4;

/// Rounds half away from zero to `places` decimal places.
#[inline]
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Decimal interest expressed as a rounded percentage (`0.1875` -> `18.75`).
#[inline]
pub fn as_percent(fraction: f64) -> f64 {
    round_to(fraction * 100.0, PERCENT_DECIMALS)
}

/// Formats acreage unrounded, keeping at least one decimal (`80.0`, `53.5`).
pub fn format_acres(acres: f64) -> String {
    if acres.is_finite() && acres.fract() == 0.0 {
        format!("{acres:.1}")
    } else {
        acres.to_string()
    }
}

/// Formats dollars with thousands separators, e.g. `-$1,234.50`.
pub fn format_currency(value: f64) -> String {
    let rounded = round_to(value, CURRENCY_DECIMALS);
    let fixed = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{frac_part}")
}
