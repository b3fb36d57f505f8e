//! Display formatting for dates and Birr amounts.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Parse a backend timestamp. Accepts RFC 3339 (`2026-11-20T00:00:00.000Z`)
/// and bare dates (`2026-11-20`).
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// `Fri, Nov 20, 2026`, or `TBD` when missing or unparseable.
pub fn long_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%a, %b %-d, %Y").to_string())
        .unwrap_or_else(|| "TBD".to_string())
}

/// `Nov 20, 2026`, or `TBD`.
pub fn short_date(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "TBD".to_string())
}

/// `14:05`, or an empty string.
pub fn time_of_day(raw: Option<&str>) -> String {
    raw.and_then(parse_timestamp)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// Amount with thousands separators, e.g. `12,500 Birr`. Missing amounts
/// show as zero.
pub fn birr(amount: Option<Decimal>) -> String {
    let amount = amount.unwrap_or(Decimal::ZERO).normalize();
    format!("{} Birr", group_thousands(&amount.to_string()))
}

/// Fixed two decimals, e.g. `1500.50 Birr`.
pub fn birr_fixed(amount: Decimal) -> String {
    format!("{:.2} Birr", amount.round_dp(2))
}

fn group_thousands(number: &str) -> String {
    let (sign, rest) = match number.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", number),
    };
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(frac) => format!("{}{}.{}", sign, grouped, frac),
        None => format!("{}{}", sign, grouped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates() {
        assert_eq!(long_date(Some("2026-11-20T00:00:00.000Z")), "Fri, Nov 20, 2026");
        assert_eq!(short_date(Some("2026-11-20")), "Nov 20, 2026");
        assert_eq!(short_date(None), "TBD");
        assert_eq!(long_date(Some("soon")), "TBD");
        assert_eq!(time_of_day(Some("2026-03-01T14:05:09Z")), "14:05");
        assert_eq!(time_of_day(None), "");
    }

    #[test]
    fn test_birr() {
        assert_eq!(birr(Some(Decimal::new(12500, 0))), "12,500 Birr");
        assert_eq!(birr(Some(Decimal::new(125050, 2))), "1,250.5 Birr");
        assert_eq!(birr(Some(Decimal::new(999, 0))), "999 Birr");
        assert_eq!(birr(None), "0 Birr");
        assert_eq!(birr_fixed(Decimal::new(15005, 1)), "1500.50 Birr");
        assert_eq!(birr_fixed(Decimal::ZERO), "0.00 Birr");
    }
}
