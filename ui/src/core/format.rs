//! Formatting helpers for presenting crack times and growth rates.

use super::marginal::Growth;

pub fn format_seconds(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}s")
    } else {
        "—".to_string()
    }
}

/// Signed marginal with a leading `+` for increases, e.g. `+30.00s`.
pub fn format_signed_seconds(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let sign = if value >= 0.0 { "+" } else { "" };
    format!("{sign}{value:.2}s")
}

pub fn format_growth(growth: Growth) -> String {
    match growth {
        Growth::Percent(pct) => format!("{pct:.1}%"),
        Growth::Undefined => "n/a".to_string(),
    }
}

/// Compact bar label: `12.3k`, `45s`, `0.4s`, keeping the sign of negatives.
pub fn format_bar_label(value: f64) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }
    let abs = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if abs >= 1000.0 {
        format!("{sign}{:.1}k", abs / 1000.0)
    } else if abs >= 1.0 {
        format!("{sign}{abs:.0}s")
    } else {
        format!("{sign}{abs:.1}s")
    }
}

/// Axis tick label for a log-scaled time axis: `10`, `1,000`, `100,000`.
pub fn format_tick(value: f64) -> String {
    if !value.is_finite() {
        return String::new();
    }
    if value < 1.0 {
        return format!("{value:.1}");
    }
    group_digits(&format!("{:.0}", value))
}

/// Integer with thousands separators, e.g. a mask keyspace.
pub fn format_count(value: u64) -> String {
    group_digits(&value.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Linear-axis tick: `1.5k` above a thousand, whole numbers otherwise.
pub fn format_linear_tick(value: f64) -> String {
    if value.abs() >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value.abs() >= 1.0 || value == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}
