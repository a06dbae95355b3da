//! # Rendering
//!
//! Turns store results into terminal text. Every function returns a `String`;
//! printing is left to the command layer so output can be checked in tests.
//!
//! ## Layout
//!
//! Month view, one block per day:
//!
//! ```text
//! 2022-7
//!   14  09:30:00  3.5  coffee
//!       12:10:42  1
//!   2 entries, total 4.5
//! ```
//!
//! Year view, one line per calendar month; months never written show `-`.

use console::style;
use tallyapp::calendar::format_time;
use tallyapp::date_idx::split_month_key;
use tallyapp::model::{month_totals, DayEntry, DayRecord, MonthRecord, YearRecord};

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "entry"
    } else {
        "entries"
    }
}

fn push_day(out: &mut String, label: &str, records: &DayRecord) {
    for (i, record) in records.iter().enumerate() {
        let label = if i == 0 { label } else { "" };
        let line = format!(
            "  {:>4}  {}  {}",
            label,
            style(format_time(record.timestamp)).dim(),
            record.value
        );
        if record.note.is_empty() {
            out.push_str(&line);
        } else {
            out.push_str(&format!("{}  {}", line, record.note));
        }
        out.push('\n');
    }
}

pub fn render_month(ym: &str, month: Option<&MonthRecord>) -> String {
    let (year, month_num) = split_month_key(ym);
    let title = format!("{}-{}", year, month_num);

    let Some(month) = month.filter(|m| m.values().any(|day| !day.is_empty())) else {
        return format!("No records for {}\n", title);
    };

    let mut out = format!("{}\n", style(title).bold());
    for (date, records) in month {
        push_day(&mut out, &date.to_string(), records);
    }
    let (count, total) = month_totals(month);
    out.push_str(&format!("  {} {}, total {}\n", count, plural(count), total));
    out
}

pub fn render_year(year: &str, months: &YearRecord) -> String {
    let mut out = format!("{}\n", style(year).bold());
    let mut year_count = 0;
    let mut year_total = 0.0;

    for (name, month) in MONTH_NAMES.iter().zip(months.iter()) {
        match month.as_ref().map(month_totals) {
            Some((count, total)) if count > 0 => {
                year_count += count;
                year_total += total;
                out.push_str(&format!(
                    "  {}  {:>4} {:<7}  total {}\n",
                    name,
                    count,
                    plural(count),
                    total
                ));
            }
            _ => out.push_str(&format!("  {}  {:>4}\n", name, "-")),
        }
    }
    out.push_str(&format!(
        "  {} {}, total {}\n",
        year_count,
        plural(year_count),
        year_total
    ));
    out
}

pub fn render_all(days: &[DayEntry]) -> String {
    if days.is_empty() {
        return "No records\n".to_string();
    }

    let mut out = String::new();
    let mut current_month: Option<(&str, &str)> = None;
    for day in days {
        let key = (day.year.as_str(), day.month.as_str());
        if current_month != Some(key) {
            out.push_str(&format!("{}\n", style(format!("{}-{}", key.0, key.1)).bold()));
            current_month = Some(key);
        }
        push_day(&mut out, &day.date.to_string(), &day.records);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tallyapp::model::SingleRecord;

    fn month_with(days: &[(u32, &[(f64, &str)])]) -> MonthRecord {
        days.iter()
            .map(|(date, entries)| {
                let records = entries
                    .iter()
                    .enumerate()
                    .map(|(i, (v, n))| SingleRecord::new(i as i64 * 1000, *v, *n))
                    .collect();
                (*date, records)
            })
            .collect()
    }

    #[test]
    fn month_lists_days_and_totals() {
        let month = month_with(&[(14, &[(3.5, "coffee"), (1.0, "")]), (2, &[(2.0, "tea")])]);
        let out = render_month("20227", Some(&month));

        assert!(out.contains("2022-7"));
        assert!(out.contains("coffee"));
        assert!(out.contains("tea"));
        assert!(out.contains("3 entries, total 6.5"));
        assert!(out.find("tea").unwrap() < out.find("coffee").unwrap());
    }

    #[test]
    fn absent_or_empty_month() {
        assert_eq!(render_month("20227", None), "No records for 2022-7\n");
        let empty = month_with(&[(3, &[])]);
        assert_eq!(render_month("202211", Some(&empty)), "No records for 2022-11\n");
    }

    #[test]
    fn year_marks_missing_months() {
        let mut year: YearRecord = Default::default();
        year[6] = Some(month_with(&[(14, &[(3.5, ""), (1.5, "")])]));

        let out = render_year("2022", &year);
        assert!(out.contains("Jul     2 entries"));
        assert!(out.contains("Jan     -"));
        assert!(out.contains("2 entries, total 5"));
        assert_eq!(out.lines().count(), 14);
    }

    #[test]
    fn all_groups_days_under_months() {
        let days = vec![
            DayEntry {
                year: "2022".into(),
                month: "7".into(),
                date: 3,
                records: vec![SingleRecord::new(0, 1.0, "a")],
            },
            DayEntry {
                year: "2022".into(),
                month: "7".into(),
                date: 14,
                records: vec![SingleRecord::new(0, 2.0, "b")],
            },
            DayEntry {
                year: "2022".into(),
                month: "11".into(),
                date: 1,
                records: vec![SingleRecord::new(0, 3.0, "c")],
            },
        ];
        let out = render_all(&days);
        assert_eq!(out.matches("2022-7").count(), 1);
        assert_eq!(out.matches("2022-11").count(), 1);
        assert!(out.contains('a') && out.contains('b') && out.contains('c'));
    }

    #[test]
    fn all_empty() {
        assert_eq!(render_all(&[]), "No records\n");
    }
}
