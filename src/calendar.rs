//! Calendar facts for a local civil timestamp: lunar month, lunar day and the
//! two-hour time branch.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use tracing::trace;

use crate::chinese::{LunarDate, table};
use crate::date::Date;
use crate::error::{Error, Result};

/// Accepted textual timestamp layouts, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// The three small integers a date-based reading is computed from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CalendarFacts {
    /// Lunar month number, `1..=12`. Leap months report their base month.
    pub lunar_month: u32,
    /// Lunar day of month, `1..=30`.
    pub lunar_day: u32,
    /// Time branch index, `1..=12`, see [`time_branch_index`].
    pub time_branch: u32,
    /// The full lunar date the facts were taken from.
    pub lunar: LunarDate,
}

impl CalendarFacts {
    /// Resolves a local civil timestamp to its calendar facts.
    ///
    /// Fails with [`Error::InvalidDate`] outside the range of the lunar year
    /// table (1900-01-31 to 2101-01-28).
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use xiaoliuren::calendar::CalendarFacts;
    ///
    /// let at = NaiveDate::from_ymd_opt(2017, 7, 23).unwrap().and_hms_opt(23, 30, 0).unwrap();
    /// let facts = CalendarFacts::from_datetime(at).unwrap();
    ///
    /// assert_eq!((6, 1, 1), (facts.lunar_month, facts.lunar_day, facts.time_branch));
    /// assert!(facts.lunar.month.is_leap());
    /// ```
    pub fn from_datetime(at: NaiveDateTime) -> Result<Self> {
        let lunar = Date::from_naive(at.date())
            .and_then(LunarDate::from_date)
            .ok_or_else(|| Error::InvalidDate {
                date: at.to_string(),
                reason: format!(
                    "outside the supported lunar calendar range ({} to {})",
                    Date::from_jdn(table::EPOCH_JDN).iso_gregorian(),
                    (table::end_of_data() + -1).iso_gregorian(),
                ),
            })?;
        let facts = Self {
            lunar_month: lunar.month.num(),
            lunar_day: lunar.day,
            time_branch: time_branch_index(at.hour()),
            lunar,
        };
        trace!(%at, ?facts, "resolved calendar facts");
        Ok(facts)
    }
}

/// Maps an hour of day (`0..=23`) to its two-hour time branch, `1..=12`.
///
/// Branch 1 (子) spans 23:00 to 00:59 and wraps across midnight, branch 2
/// (丑) spans 01:00 to 02:59, and so on.
///
/// ```
/// use xiaoliuren::calendar::time_branch_index;
///
/// assert_eq!(1, time_branch_index(23));
/// assert_eq!(1, time_branch_index(0));
/// assert_eq!(2, time_branch_index(1));
/// assert_eq!(7, time_branch_index(12));
/// ```
pub fn time_branch_index(hour: u32) -> u32 {
    let index = hour.saturating_add(1) / 2 + 1;
    if index > 12 { 1 } else { index }
}

/// Parses a local timestamp such as `2024-02-10T12:00` or
/// `2024-02-10 12:00:30`. A bare date means midnight.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime> {
    let input = input.trim();
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| Error::InvalidDate {
            date: input.to_owned(),
            reason: "expected YYYY-MM-DDTHH:MM[:SS] or YYYY-MM-DD".to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn time_branches() {
        let expected = [
            1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 6, 7, 7, 8, 8, 9, 9, 10, 10, 11, 11, 12, 12, 1,
        ];
        for (hour, std) in (0..24).zip(expected) {
            assert_eq!(std, time_branch_index(hour), "hour {hour}");
        }
    }

    #[test]
    fn facts() {
        for (std, when) in [
            ((1, 1, 7), at(2024, 2, 10, 12)),
            ((11, 25, 1), at(2000, 1, 1, 0)),
            ((1, 5, 1), at(2024, 2, 14, 23)),
            ((12, 29, 2), at(2101, 1, 28, 1)),
        ] {
            let facts = CalendarFacts::from_datetime(when).unwrap();
            assert_eq!(
                std,
                (facts.lunar_month, facts.lunar_day, facts.time_branch),
                "{when}"
            );
        }
    }

    #[test]
    fn leap_month_uses_magnitude() {
        let facts = CalendarFacts::from_datetime(at(2020, 5, 23, 8)).unwrap();
        assert_eq!(4, facts.lunar_month);
        assert!(facts.lunar.month.is_leap());
    }

    #[test]
    fn out_of_range() {
        for when in [at(1900, 1, 30, 12), at(2101, 1, 29, 0), at(1066, 10, 14, 9)] {
            let err = CalendarFacts::from_datetime(when).unwrap_err();
            assert!(matches!(err, Error::InvalidDate { .. }), "{when}");
        }
    }

    #[test]
    fn parse() {
        for input in [
            "2024-02-10T12:00",
            "2024-02-10T12:00:00",
            "2024-02-10 12:00",
            " 2024-02-10 12:00:00 ",
        ] {
            assert_eq!(at(2024, 2, 10, 12), parse_datetime(input).unwrap(), "{input}");
        }
        assert_eq!(at(2024, 2, 10, 0), parse_datetime("2024-02-10").unwrap());
        assert!(matches!(
            parse_datetime("next tuesday"),
            Err(Error::InvalidDate { .. })
        ));
    }
}
