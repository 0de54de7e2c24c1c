//! Year handling for date columns and the header stamp

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})\b").expect("valid year regex"));

/// Every four-digit year in `text`, in order
pub fn years(text: &str) -> Vec<&str> {
    YEAR.find_iter(text).map(|m| m.as_str()).collect()
}

pub fn first_year(text: &str) -> Option<&str> {
    YEAR.find(text).map(|m| m.as_str())
}

/// Compact year range for a dates cell.
///
/// `July 2019 - June 2024` becomes `2019 - 2024`; an end year equal to
/// `today`'s year prints as `Present`, as does a lone current year. Anything
/// beyond the first two years is ignored.
pub fn year_range(dates: &str, today: NaiveDate) -> String {
    let current = today.year().to_string();

    match years(dates).as_slice() {
        [] => String::new(),
        [only] if *only == current => "Present".to_string(),
        [only] => only.to_string(),
        [start, end, ..] if *end == current => format!("{start} - Present"),
        [start, end, ..] => format!("{start} - {end}"),
    }
}

/// `October 2026`
pub fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 10, 16).expect("valid date")
    }

    #[test]
    fn test_year_range() {
        let today = day(2026);
        assert_eq!(year_range("July 2019 - June 2024", today), "2019 - 2024");
        assert_eq!(year_range("2019 - 2026", today), "2019 - Present");
        assert_eq!(year_range("2026", today), "Present");
        assert_eq!(year_range("Spring 2012", today), "2012");
        assert_eq!(year_range("ongoing", today), "");
    }

    #[test]
    fn test_years_ignore_longer_numbers() {
        assert_eq!(years("grant 123456 from 2015 to 2018"), vec!["2015", "2018"]);
        assert_eq!(first_year("no year"), None);
    }

    #[test]
    fn test_month_year() {
        assert_eq!(month_year(day(2026)), "October 2026");
    }
}
