//! Calendar arithmetic and timestamp formatting used when presenting records.

use chrono::{DateTime, Local, TimeZone};

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Length of `month` (1-based) in `year`, or `None` for a month outside 1..=12.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let days = *DAYS_IN_MONTH.get(month.checked_sub(1)? as usize)?;
    if month == 2 && is_leap_year(year) {
        Some(29)
    } else {
        Some(days)
    }
}

fn local(timestamp_ms: i64) -> Option<DateTime<Local>> {
    Local.timestamp_millis_opt(timestamp_ms).single()
}

/// `YYYY-MM-DD` in local time. Out-of-range timestamps render as `"-"`.
pub fn format_date(timestamp_ms: i64) -> String {
    local(timestamp_ms)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// `HH:MM:SS` in local time. Out-of-range timestamps render as `"-"`.
pub fn format_time(timestamp_ms: i64) -> String {
    local(timestamp_ms)
        .map(|d| d.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2022));
    }

    #[test]
    fn february_length_follows_leap_rule() {
        assert_eq!(days_in_month(2024, 2), Some(29));
        assert_eq!(days_in_month(2023, 2), Some(28));
        assert_eq!(days_in_month(2100, 2), Some(28));
        assert_eq!(days_in_month(2000, 2), Some(29));
    }

    #[test]
    fn other_month_lengths() {
        assert_eq!(days_in_month(2022, 1), Some(31));
        assert_eq!(days_in_month(2022, 4), Some(30));
        assert_eq!(days_in_month(2022, 12), Some(31));
        assert_eq!(days_in_month(2022, 0), None);
        assert_eq!(days_in_month(2022, 13), None);
    }

    #[test]
    fn formats_are_zero_padded() {
        let t = Local.with_ymd_and_hms(2022, 7, 4, 8, 5, 9).unwrap();
        let ms = t.timestamp_millis();
        assert_eq!(format_date(ms), "2022-07-04");
        assert_eq!(format_time(ms), "08:05:09");
    }

    #[test]
    fn format_date_agrees_with_chrono() {
        let now = Local::now();
        let expected = format!("{:04}-{:02}-{:02}", now.year(), now.month(), now.day());
        assert_eq!(format_date(now.timestamp_millis()), expected);
    }

    #[test]
    fn out_of_range_timestamp() {
        assert_eq!(format_date(i64::MAX), "-");
        assert_eq!(format_time(i64::MAX), "-");
    }
}
