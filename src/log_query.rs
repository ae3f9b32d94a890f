use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Exercise;

// Matches the JS Date#toDateString rendering, e.g. "Mon Jan 15 2024".
const DATE_FORMAT: &str = "%a %b %d %Y";

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[derive(Debug, Default)]
pub struct LogFilter {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct LogEntryView {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<&Exercise> for LogEntryView {
    fn from(entry: &Exercise) -> Self {
        Self {
            description: entry
                .description
                .clone()
                .unwrap_or_else(|| "No description".to_string()),
            duration: entry.duration.unwrap_or(0),
            date: entry
                .date
                .map(format_date)
                .unwrap_or_else(|| "Invalid date".to_string()),
        }
    }
}

/// Applies the fixed from -> to -> limit pipeline to a user's log and shapes
/// the survivors for the response. Entries without a date are dropped by a
/// date bound but kept when no bound is given. The returned count is the
/// filtered length before `limit` truncation.
pub fn filter_log(entries: &[Exercise], filter: &LogFilter) -> (usize, Vec<LogEntryView>) {
    let filtered: Vec<&Exercise> = entries
        .iter()
        .filter(|e| match filter.from {
            Some(from) => e.date.map_or(false, |d| d >= from),
            None => true,
        })
        .filter(|e| match filter.to {
            Some(to) => e.date.map_or(false, |d| d <= to),
            None => true,
        })
        .collect();

    let count = filtered.len();
    let log = filtered
        .into_iter()
        .take(filter.limit.unwrap_or(usize::MAX))
        .map(LogEntryView::from)
        .collect();

    (count, log)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(description: &str, duration: i64, date: &str) -> Exercise {
        Exercise::new(
            description.to_string(),
            duration,
            parse_date(date).unwrap(),
        )
    }

    fn sample_log() -> Vec<Exercise> {
        vec![
            entry("run", 15, "2024-01-01"),
            entry("swim", 30, "2024-01-15"),
            entry("bike", 45, "2024-02-01"),
        ]
    }

    #[test]
    fn no_filter_returns_all_in_insertion_order() {
        let (count, log) = filter_log(&sample_log(), &LogFilter::default());
        assert_eq!(count, 3);
        let descriptions: Vec<_> = log.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(descriptions, ["run", "swim", "bike"]);
    }

    #[test]
    fn from_and_to_bounds_are_inclusive() {
        let filter = LogFilter {
            from: parse_date("2024-01-10"),
            to: parse_date("2024-01-31"),
            ..Default::default()
        };
        let (count, log) = filter_log(&sample_log(), &filter);
        assert_eq!(count, 1);
        assert_eq!(log[0].description, "swim");

        // Bounds matching an entry's date exactly keep the entry.
        let exact = LogFilter {
            from: parse_date("2024-01-01"),
            to: parse_date("2024-02-01"),
            ..Default::default()
        };
        let (count, _) = filter_log(&sample_log(), &exact);
        assert_eq!(count, 3);
    }

    #[test]
    fn count_is_taken_before_limit_truncation() {
        let filter = LogFilter {
            limit: Some(1),
            ..Default::default()
        };
        let (count, log) = filter_log(&sample_log(), &filter);
        assert_eq!(count, 3);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].description, "run");
    }

    #[test]
    fn limit_caps_the_filtered_result_not_the_raw_log() {
        let filter = LogFilter {
            from: parse_date("2024-01-10"),
            limit: Some(1),
            ..Default::default()
        };
        let (count, log) = filter_log(&sample_log(), &filter);
        assert_eq!(count, 2);
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].description, "swim");
    }

    #[test]
    fn undated_entries_are_dropped_by_bounds_but_kept_otherwise() {
        let mut entries = sample_log();
        entries.push(Exercise {
            description: None,
            duration: None,
            date: None,
        });

        let (count, log) = filter_log(&entries, &LogFilter::default());
        assert_eq!(count, 4);
        assert_eq!(log[3].description, "No description");
        assert_eq!(log[3].duration, 0);
        assert_eq!(log[3].date, "Invalid date");

        let bounded = LogFilter {
            from: parse_date("2000-01-01"),
            ..Default::default()
        };
        let (count, _) = filter_log(&entries, &bounded);
        assert_eq!(count, 3);
    }

    #[test]
    fn dates_render_in_day_of_week_format() {
        assert_eq!(format_date(parse_date("2024-01-15").unwrap()), "Mon Jan 15 2024");
        assert_eq!(format_date(parse_date("2024-01-01").unwrap()), "Mon Jan 01 2024");
    }

    #[test]
    fn parse_date_rejects_garbage() {
        assert!(parse_date("not-a-date").is_none());
        assert!(parse_date("2024-13-40").is_none());
        assert!(parse_date("").is_none());
        assert_eq!(
            parse_date(" 2024-01-15 "),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
    }
}
