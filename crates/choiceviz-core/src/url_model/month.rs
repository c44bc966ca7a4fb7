//! `YYYY-MM` month inputs and their `<monthname>-<year>` query form.

use std::fmt;
use std::str::FromStr;

use crate::error::AppError;

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// A calendar month as picked in a month input (`2024-07`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    pub fn new(year: u16, month: u8) -> Result<Self, AppError> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidDate(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    /// Lowercase English month name.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[usize::from(self.month - 1)]
    }

    /// Query-parameter form, e.g. `july-2024`. The year keeps four digits.
    pub fn query_value(&self) -> String {
        format!("{}-{:04}", self.month_name(), self.year)
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    /// Accepts exactly `YYYY-MM` with a two-digit month.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || AppError::InvalidDate(s.to_string());
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }
        if !year.bytes().chain(month.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let year: u16 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month).map_err(|_| invalid())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_month_input() {
        let ym: YearMonth = "2024-07".parse().unwrap();
        assert_eq!(ym.year(), 2024);
        assert_eq!(ym.month(), 7);
        assert_eq!(ym.query_value(), "july-2024");
        assert_eq!(ym.to_string(), "2024-07");
    }

    #[test]
    fn year_keeps_leading_zeros() {
        let ym: YearMonth = "0999-07".parse().unwrap();
        assert_eq!(ym.query_value(), "july-0999");
        assert_eq!(ym.to_string(), "0999-07");
        let ym: YearMonth = "0000-01".parse().unwrap();
        assert_eq!(ym.query_value(), "january-0000");
    }

    #[test]
    fn every_month_has_a_name() {
        let names: Vec<&str> = (1..=12)
            .map(|m| YearMonth::new(2020, m).unwrap().month_name())
            .collect();
        assert_eq!(names.first(), Some(&"january"));
        assert_eq!(names.last(), Some(&"december"));
        assert_eq!(names.len(), 12);
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(matches!(
            "2024-13".parse::<YearMonth>(),
            Err(AppError::InvalidDate(_))
        ));
        assert!("2024-00".parse::<YearMonth>().is_err());
    }

    #[test]
    fn rejects_malformed_input() {
        for bad in ["", "2024", "2024-7", "24-07", "2024/07", "abcd-ef", "2024-07-01"] {
            assert!(bad.parse::<YearMonth>().is_err(), "accepted {bad:?}");
        }
    }
}
