mod clock;
mod consts;
mod discordian;
mod prelude;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use discordian::{DiscordianDate, Holyday, Season};
pub use types::{Day, Month, Year, day_of_year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::Datelike;
use std::str::FromStr;

/// A proleptic Gregorian calendar date that is known to exist.
///
/// Values only come out of validating constructors, the ISO parser or a
/// [`Clock`], so every `GregorianDate` names a real day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct GregorianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

/// Why a piece of text or a set of components is not a Gregorian date.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Errors surfaced to callers of the converter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The input is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date {input:?}")]
    InvalidDate {
        input:  String,
        #[source]
        source: ParseError,
    },
}

/// Converts a Gregorian date to its Discordian equivalent.
pub fn convert(date: GregorianDate) -> DiscordianDate {
    DiscordianDate::from_gregorian(date)
}

impl GregorianDate {
    /// Creates a date from already validated components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if `day` was validated against a
    /// different year or month and does not exist in this one.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::new(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from raw numbers, validating each component.
    ///
    /// # Errors
    /// Returns the `ParseError` of the first component that is out of range.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Parses a strict ISO `YYYY-MM-DD` date.
    ///
    /// # Errors
    /// Returns `Error::InvalidDate` carrying the rejected input and the reason.
    pub fn parse_iso(input: &str) -> Result<Self, Error> {
        input.parse().map_err(|source| Error::InvalidDate {
            input: input.to_owned(),
            source,
        })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// 1-based day of the year (1 January is 1, 31 December is 365 or 366)
    pub const fn ordinal(&self) -> u16 {
        day_of_year(self.year(), self.month(), self.day())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Helper to parse an all-digit field with better error messages
    fn parse_field<T: FromStr>(field: &str, width: usize, input: &str) -> Result<T, ParseError> {
        if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(input.to_owned()));
        }
        field
            .parse::<T>()
            .map_err(|_| ParseError::InvalidFormat(input.to_owned()))
    }
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };
        let [year_width, month_width, day_width] = ISO_FIELD_WIDTHS;

        // Shape first, so "2023-1-1" is a format error rather than a range error
        let year: u16 = Self::parse_field(year, year_width, trimmed)?;
        let month: u8 = Self::parse_field(month, month_width, trimmed)?;
        let day: u8 = Self::parse_field(day, day_width, trimmed)?;

        Self::from_ymd(year, month, day)
    }
}

impl TryFrom<chrono::NaiveDate> for GregorianDate {
    type Error = ParseError;

    fn try_from(date: chrono::NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(date.year())
            .map_err(|_| ParseError::InvalidYear(0))
            .and_then(Year::new)?;
        // chrono months and days always fit in u8
        let month = Month::new(u8::try_from(date.month()).unwrap_or(0))?;
        let day = Day::new(u8::try_from(date.day()).unwrap_or(0), year, month)?;
        Ok(Self { year, month, day })
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::gregorian;

    #[test]
    fn test_parse_iso_full_date() {
        let date = "1991-08-15".parse::<GregorianDate>().unwrap();
        assert_eq!(date.year(), 1991);
        assert_eq!(date.month(), 8);
        assert_eq!(date.day(), 15);
        assert_eq!(date, gregorian(1991, 8, 15));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let date = "  2024-02-29\n".parse::<GregorianDate>().unwrap();
        assert_eq!(date, gregorian(2024, 2, 29));
    }

    #[test]
    fn test_parse_rejections() {
        struct TestCase {
            input:       &'static str,
            expected:    ParseError,
            description: &'static str,
        }

        let cases = [
            TestCase {
                input:       "",
                expected:    ParseError::EmptyInput,
                description: "empty input",
            },
            TestCase {
                input:       "   ",
                expected:    ParseError::EmptyInput,
                description: "whitespace only",
            },
            TestCase {
                input:       "2023-13-40",
                expected:    ParseError::InvalidMonth(13),
                description: "month out of range",
            },
            TestCase {
                input:       "2023-02-29",
                expected:    ParseError::InvalidDay {
                    month: 2,
                    day:   29,
                    year:  2023,
                },
                description: "29 February in a common year",
            },
            TestCase {
                input:       "2023-04-00",
                expected:    ParseError::InvalidDay {
                    month: 4,
                    day:   0,
                    year:  2023,
                },
                description: "day zero",
            },
            TestCase {
                input:       "0000-01-01",
                expected:    ParseError::InvalidYear(0),
                description: "year zero",
            },
            TestCase {
                input:       "2023-1-01",
                expected:    ParseError::InvalidFormat("2023-1-01".to_owned()),
                description: "single-digit month",
            },
            TestCase {
                input:       "20230101",
                expected:    ParseError::InvalidFormat("20230101".to_owned()),
                description: "basic format without separators",
            },
            TestCase {
                input:       "2023-01-01-05",
                expected:    ParseError::InvalidFormat("2023-01-01-05".to_owned()),
                description: "too many separators",
            },
            TestCase {
                input:       "01/15/2000",
                expected:    ParseError::InvalidFormat("01/15/2000".to_owned()),
                description: "month-first format",
            },
            TestCase {
                input:       "2023-+1-01",
                expected:    ParseError::InvalidFormat("2023-+1-01".to_owned()),
                description: "sign inside a field",
            },
        ];

        for case in &cases {
            assert_eq!(
                case.input.parse::<GregorianDate>(),
                Err(case.expected.clone()),
                "Expected failure for: {}",
                case.description
            );
        }
    }

    #[test]
    fn test_parse_iso_wraps_invalid_date() {
        let err = GregorianDate::parse_iso("2023-13-40").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidDate {
                input:  "2023-13-40".to_owned(),
                source: ParseError::InvalidMonth(13),
            }
        );
        assert_eq!(err.to_string(), r#"invalid date "2023-13-40""#);
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "Invalid month: 13 (must be 1-12)");
    }

    #[test]
    fn test_new_revalidates_day() {
        let leap_day = Day::new(29, Year::new(2024).unwrap(), Month::new(2).unwrap()).unwrap();
        let result = GregorianDate::new(Year::new(2023).unwrap(), Month::new(2).unwrap(), leap_day);
        assert!(matches!(result, Err(ParseError::InvalidDay { day: 29, .. })));
    }

    #[test]
    fn test_display_round_trip() {
        let date = gregorian(33, 7, 4);
        assert_eq!(date.to_string(), "0033-07-04");
        assert_eq!(date.to_string().parse::<GregorianDate>().unwrap(), date);
    }

    #[test]
    fn test_ordinal_and_leap() {
        assert_eq!(gregorian(2024, 2, 29).ordinal(), 60);
        assert!(gregorian(2024, 2, 29).is_leap_year());
        assert_eq!(gregorian(2023, 12, 31).ordinal(), 365);
        assert!(!gregorian(2023, 12, 31).is_leap_year());
    }

    #[test]
    fn test_ordering() {
        assert!(gregorian(2023, 12, 31) < gregorian(2024, 1, 1));
        assert!(gregorian(2024, 2, 28) < gregorian(2024, 2, 29));
    }

    #[test]
    fn test_from_naive_date() {
        let naive = chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(GregorianDate::try_from(naive).unwrap(), gregorian(2024, 2, 29));

        let too_late = chrono::NaiveDate::from_ymd_opt(10_000, 1, 1).unwrap();
        assert_eq!(
            GregorianDate::try_from(too_late),
            Err(ParseError::InvalidYear(10_000))
        );

        let before_epoch = chrono::NaiveDate::from_ymd_opt(-44, 3, 15).unwrap();
        assert!(GregorianDate::try_from(before_epoch).is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let date = gregorian(2024, 2, 29);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, r#""2024-02-29""#);
        let parsed: GregorianDate = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);

        let result: Result<GregorianDate, _> = serde_json::from_str(r#""2023-02-29""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_convert_matches_from_gregorian() {
        let date = gregorian(2023, 1, 5);
        assert_eq!(convert(date), DiscordianDate::from_gregorian(date));
    }

    #[test]
    fn test_constants() {
        assert_eq!(MAX_YEAR, 9999);
        assert_eq!(SEASON_LENGTH * 5, DAYS_IN_DISCORDIAN_YEAR);
    }
}
