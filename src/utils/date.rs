//! Calendar dates for timeline entries.
//!
//! Profiles store dates as `"YYYY-MM-DD"`. [`IsoDate`] parses and validates
//! that format and renders the month/year labels used by the llms.txt prompt
//! and the PDF résumé.

use anyhow::{Result, bail};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;

const MONTHS_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A validated calendar date without time or timezone.
///
/// Field order gives chronological `Ord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct IsoDate {
    pub year: u16,
    pub month: u8,
    pub day: u8,
}

impl IsoDate {
    pub const fn from_ymd(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Parse from exactly `"YYYY-MM-DD"`.
    pub fn parse(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return None;
        }

        let date = Self::from_ymd(
            parse_u16(&bytes[0..4])?,
            parse_u8(&bytes[5..7])?,
            parse_u8(&bytes[8..10])?,
        );
        date.validate().ok()?;
        Some(date)
    }

    pub fn validate(&self) -> Result<()> {
        let Self { year, month, day } = *self;

        if !(1..=12).contains(&month) {
            bail!("month is invalid: {month}");
        }

        let max_days = Self::days_in_month(year, month);
        if day == 0 || day > max_days {
            bail!("day is invalid: {day}");
        }

        Ok(())
    }

    #[inline]
    fn is_leap_year(year: u16) -> bool {
        year.is_multiple_of(4) && (!year.is_multiple_of(100) || year.is_multiple_of(400))
    }

    #[inline]
    fn days_in_month(year: u16, month: u8) -> u8 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            2 if Self::is_leap_year(year) => 29,
            2 => 28,
            _ => 0,
        }
    }

    /// `"November 2023"`
    pub fn month_year_long(self) -> String {
        format!("{} {:04}", MONTHS_LONG[(self.month - 1) as usize], self.year)
    }

    /// `"Nov 2023"`
    pub fn month_year_short(self) -> String {
        format!("{} {:04}", MONTHS_SHORT[(self.month - 1) as usize], self.year)
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for IsoDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for IsoDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid ISO date `{raw}`, expected YYYY-MM-DD")))
    }
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let date = IsoDate::parse("2023-11-15").unwrap();
        assert_eq!(date, IsoDate::from_ymd(2023, 11, 15));
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        assert!(IsoDate::parse("2023-11").is_none());
        assert!(IsoDate::parse("2023/11/15").is_none());
        assert!(IsoDate::parse("2023-11-15T00:00:00Z").is_none());
        assert!(IsoDate::parse("20a3-11-15").is_none());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(IsoDate::parse("2023-13-01").is_none());
        assert!(IsoDate::parse("2023-04-31").is_none());
        assert!(IsoDate::parse("2023-02-29").is_none());
        assert!(IsoDate::parse("2024-02-29").is_some());
        assert!(IsoDate::parse("1900-02-29").is_none());
        assert!(IsoDate::parse("2000-02-29").is_some());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let a = IsoDate::from_ymd(2022, 6, 1);
        let b = IsoDate::from_ymd(2023, 1, 1);
        let c = IsoDate::from_ymd(2023, 1, 2);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_month_year_labels() {
        assert_eq!(IsoDate::from_ymd(2023, 11, 15).month_year_short(), "Nov 2023");
        assert_eq!(IsoDate::from_ymd(2020, 1, 1).month_year_short(), "Jan 2020");
        assert_eq!(IsoDate::from_ymd(2023, 12, 31).month_year_short(), "Dec 2023");
        assert_eq!(IsoDate::from_ymd(2023, 11, 1).month_year_long(), "November 2023");
        assert_eq!(IsoDate::from_ymd(2014, 7, 1).month_year_long(), "July 2014");
    }

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(IsoDate::from_ymd(2015, 7, 1).to_string(), "2015-07-01");
    }

    #[test]
    fn test_serde_as_string() {
        let date: IsoDate = serde_json::from_str("\"2018-07-01\"").unwrap();
        assert_eq!(date, IsoDate::from_ymd(2018, 7, 1));
        assert_eq!(serde_json::to_string(&date).unwrap(), "\"2018-07-01\"");

        let err = serde_json::from_str::<IsoDate>("\"2018-7-1\"").unwrap_err();
        assert!(err.to_string().contains("invalid ISO date"));
    }
}
