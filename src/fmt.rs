//! Shared formatting helpers for metric tables.
//!
//! All pure formatting functions (no layout, no styling) live here.

use serde_json::Value;

const NOT_AVAILABLE: &str = "N/A";

/// Magnitude thresholds, largest first.
const MAGNITUDES: [(f64, &str); 4] = [(1e12, "T"), (1e9, "B"), (1e6, "M"), (1e3, "K")];

const FILE_SIZE_UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];

/// Format a metric value with a K/M/B/T suffix and a fixed 2-decimal mantissa.
///
/// `"1.23T"`, `"5.60B"`, `"12.35K"`, `"-987.65"`, `"42.00"`; `"N/A"` for
/// missing or non-finite input.
pub fn format_value(value: Option<f64>) -> String {
    let v = match value {
        Some(v) if v.is_finite() => v,
        _ => return NOT_AVAILABLE.to_string(),
    };

    let sign = if v < 0.0 { "-" } else { "" };
    let abs = v.abs();
    let (scaled, suffix) = MAGNITUDES
        .iter()
        .find(|(threshold, _)| abs >= *threshold)
        .map(|(threshold, suffix)| (abs / threshold, *suffix))
        .unwrap_or((abs, ""));

    // half away from zero, `{:.2}` alone rounds exact halves to even
    let mantissa = format!("{:.2}", (scaled * 100.0).round() / 100.0);
    // -0.001 rounds to "0.00", keep it unsigned
    if mantissa.bytes().all(|b| b == b'0' || b == b'.') {
        return format!("{}{}", mantissa, suffix);
    }
    format!("{}{}{}", sign, mantissa, suffix)
}

/// Format a dynamically typed payload value.
///
/// Numbers go through [`format_value`], `null` becomes `"N/A"`, strings are
/// assumed to be formatted already and pass through untouched.
pub fn format_raw_value(value: &Value) -> String {
    match value {
        Value::Null => NOT_AVAILABLE.to_string(),
        Value::Number(n) => format_value(n.as_f64()),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Format byte count as a file size: `"0 Bytes"`, `"1.5 KB"`, `"2 MB"`.
///
/// Units step by 1024 up to GB. One decimal is kept only when the value is
/// not a whole number of units.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", FILE_SIZE_UNITS[0]);
    }

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < FILE_SIZE_UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{:.1}", (size * 10.0).round() / 10.0);
    let trimmed = rounded.strip_suffix(".0").unwrap_or(&rounded);
    format!("{} {}", trimmed, FILE_SIZE_UNITS[unit])
}

/// Format growth rate (percent) with explicit sign: `"+5.25%"`, `"-3.00%"`.
pub fn format_growth_rate(rate: Option<f64>) -> String {
    match rate {
        Some(r) if r.is_finite() => {
            if r > 0.0 {
                format!("+{:.2}%", r)
            } else if r < 0.0 {
                format!("{:.2}%", r)
            } else {
                "0.00%".to_string()
            }
        }
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Truncate string to max chars with unicode ellipsis (`…`).
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}
