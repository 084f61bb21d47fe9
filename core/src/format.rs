use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::date_range::{parse_iso_date, CalendarDay};

pub const MISSING: &str = "N/A";

pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| CalendarDay::new(d).display())
        .unwrap_or_else(|| MISSING.to_string())
}

/// Renders a `YYYY-MM-DD` wire value; anything unparsable is shown as is.
pub fn format_iso_date(value: Option<&str>) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => parse_iso_date(raw)
            .map(|d| CalendarDay::new(d).display())
            .unwrap_or_else(|| raw.to_string()),
        None => MISSING.to_string(),
    }
}

pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return MISSING.to_string();
    };
    match parse_timestamp(raw) {
        Some(ts) => format!(
            "{}, {}",
            CalendarDay::new(ts.date()).display(),
            ts.format("%H:%M:%S")
        ),
        None => raw.to_string(),
    }
}

// Offsets are kept as sent; no conversion to the viewer's zone.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}

pub fn full_name(nombres: Option<&str>, apellidos: Option<&str>) -> String {
    let joined = format!(
        "{} {}",
        nombres.unwrap_or_default().trim(),
        apellidos.unwrap_or_default().trim()
    );
    joined.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_dates_and_missing_values() {
        assert_eq!(format_date(NaiveDate::from_ymd_opt(2025, 3, 1)), "1/3/2025");
        assert_eq!(format_date(None), "N/A");
        assert_eq!(format_iso_date(Some("2025-12-24")), "24/12/2025");
        assert_eq!(format_iso_date(Some("")), "N/A");
        assert_eq!(format_iso_date(Some("24-12-2025")), "24-12-2025");
    }

    #[test]
    fn formats_timestamps_without_zone_conversion() {
        assert_eq!(
            format_timestamp(Some("2025-03-10T14:05:00-05:00")),
            "10/3/2025, 14:05:00"
        );
        assert_eq!(
            format_timestamp(Some("2025-03-10 08:30")),
            "10/3/2025, 08:30:00"
        );
        assert_eq!(format_timestamp(Some("ayer")), "ayer");
        assert_eq!(format_timestamp(None), "N/A");
    }

    #[test]
    fn full_name_trims_parts() {
        assert_eq!(full_name(Some(" Ana "), Some("Pérez")), "Ana Pérez");
        assert_eq!(full_name(None, Some("Pérez")), "Pérez");
        assert_eq!(full_name(None, None), "");
    }
}
