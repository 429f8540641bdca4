//! Formatting utilities for money, dates, and quantities.

/// Format a cent amount as dollars with thousands separators
/// (e.g., 129950 -> "$1,299.50"). Negative amounts keep their sign.
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let dollars = abs / 100;
    let remainder = abs % 100;
    format!("{}${}.{:02}", sign, group_thousands(dollars), remainder)
}

/// Insert comma separators into a whole number (e.g., 1299 -> "1,299").
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Format a quantity with its unit (e.g., "250 pcs").
pub fn format_quantity(quantity: u32, unit: &str) -> String {
    format!("{} {}", group_thousands(quantity as u64), unit)
}

/// Format an optional ISO date for display, with a dash placeholder.
///
/// The API already sends YYYY-MM-DD; this only guards against absent values
/// so cards keep their layout.
pub fn format_date(date: Option<&str>) -> String {
    match date {
        Some(d) if !d.is_empty() => d.to_string(),
        _ => "—".to_string(),
    }
}

/// Format a signed percentage delta for KPI cards (e.g., "+4.2%", "-1.0%").
pub fn format_delta_pct(delta: f64) -> String {
    if delta >= 0.0 {
        format!("+{:.1}%", delta)
    } else {
        format!("{:.1}%", delta)
    }
}

/// Position indicator for record browsers (e.g., "3 / 41").
///
/// Indexes are zero-based internally; display is one-based. An empty
/// sequence shows "0 / 0".
pub fn format_position(index: usize, len: usize) -> String {
    if len == 0 {
        "0 / 0".to_string()
    } else {
        format!("{} / {}", index + 1, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cents() {
        assert_eq!(format_cents(0), "$0.00");
        assert_eq!(format_cents(5), "$0.05");
        assert_eq!(format_cents(129950), "$1,299.50");
        assert_eq!(format_cents(100000000), "$1,000,000.00");
        assert_eq!(format_cents(-2500), "-$25.00");
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(250, "pcs"), "250 pcs");
        assert_eq!(format_quantity(12500, "kg"), "12,500 kg");
    }

    #[test]
    fn test_format_date_placeholder() {
        assert_eq!(format_date(Some("2026-08-12")), "2026-08-12");
        assert_eq!(format_date(Some("")), "—");
        assert_eq!(format_date(None), "—");
    }

    #[test]
    fn test_format_delta_pct() {
        assert_eq!(format_delta_pct(4.25), "+4.2%");
        assert_eq!(format_delta_pct(0.0), "+0.0%");
        assert_eq!(format_delta_pct(-1.0), "-1.0%");
    }

    #[test]
    fn test_format_position() {
        assert_eq!(format_position(0, 41), "1 / 41");
        assert_eq!(format_position(2, 41), "3 / 41");
        assert_eq!(format_position(0, 0), "0 / 0");
    }
}
