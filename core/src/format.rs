//! Display formatting for dashboard values (pt-BR conventions).

use chrono::{DateTime, TimeZone, Utc};

/// Formats a number with `.` thousands separators, `,` decimal mark and at
/// most two fraction digits: `1234.5` → `"1.234,5"`, `2048.0` → `"2.048"`.
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let cents = (value.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    match frac {
        0 => format!("{sign}{grouped}"),
        f if f % 10 == 0 => format!("{sign}{grouped},{}", f / 10),
        f => format!("{sign}{grouped},{f:02}"),
    }
}

/// `dd/mm/yyyy` in the given timezone, `-` when the backend sent no date.
pub fn format_date_in<Tz: TimeZone>(value: Option<&DateTime<Utc>>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value
        .map(|dt| dt.with_timezone(tz).format("%d/%m/%Y").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `dd/mm/yyyy HH:MM:SS` in the given timezone, `-` when missing.
pub fn format_datetime_in<Tz: TimeZone>(value: Option<&DateTime<Utc>>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value
        .map(|dt| dt.with_timezone(tz).format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// [`format_date_in`] using the browser's local timezone.
pub fn format_date(value: Option<&DateTime<Utc>>) -> String {
    format_date_in(value, &chrono::Local)
}

/// [`format_datetime_in`] using the browser's local timezone.
pub fn format_datetime(value: Option<&DateTime<Utc>>) -> String {
    format_datetime_in(value, &chrono::Local)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_decimal() {
        assert_eq!(format_decimal(0.0), "0");
        assert_eq!(format_decimal(42.0), "42");
        assert_eq!(format_decimal(1234.5), "1.234,5");
        assert_eq!(format_decimal(2048.0), "2.048");
        assert_eq!(format_decimal(1523.467), "1.523,47");
        assert_eq!(format_decimal(0.125), "0,13");
        assert_eq!(format_decimal(1_000_000.01), "1.000.000,01");
        assert_eq!(format_decimal(-12.3), "-12,3");
        assert_eq!(format_decimal(f64::NAN), "-");
    }

    #[test]
    fn test_format_dates() {
        let dt: DateTime<Utc> = "2024-03-09T14:05:07Z".parse().unwrap();
        assert_eq!(format_date_in(Some(&dt), &Utc), "09/03/2024");
        assert_eq!(format_datetime_in(Some(&dt), &Utc), "09/03/2024 14:05:07");
        assert_eq!(format_date_in(None, &Utc), "-");
        assert_eq!(format_datetime_in(None, &Utc), "-");
    }
}
