//! The three-leg counting engine.
//!
//! Every reading counts three times around the six palaces: the month leg
//! starts at Da An, the day leg starts where the month leg landed and the hour
//! leg starts where the day leg landed. The four entry points differ only in
//! where the three counts come from.

use std::fmt::{self, Display};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::Serialize;
use tracing::debug;

use crate::calendar::CalendarFacts;
use crate::error::{Error, Result};
use crate::palace::Palace;

/// Outcome of one divination run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivinationResult {
    month_palace: Palace,
    day_palace: Palace,
    hour_palace: Palace,
    month_name: &'static str,
    day_name: &'static str,
    hour_name: &'static str,
    description: String,
    path: [u8; 3],
}

impl DivinationResult {
    fn new(month: Palace, day: Palace, hour: Palace, description: String) -> Self {
        debug!(
            month = month.index(),
            day = day.index(),
            hour = hour.index(),
            %description,
            "divination computed"
        );
        Self {
            month_palace: month,
            day_palace: day,
            hour_palace: hour,
            month_name: month.info().cn_name,
            day_name: day.info().cn_name,
            hour_name: hour.info().cn_name,
            description,
            path: [month.index(), day.index(), hour.index()],
        }
    }

    /// Landing palace of the month (first) leg.
    pub fn month_palace(&self) -> Palace {
        self.month_palace
    }
    /// Landing palace of the day (second) leg.
    pub fn day_palace(&self) -> Palace {
        self.day_palace
    }
    /// Landing palace of the hour (third) leg; the reading itself.
    pub fn hour_palace(&self) -> Palace {
        self.hour_palace
    }
    pub fn month_name(&self) -> &'static str {
        self.month_name
    }
    pub fn day_name(&self) -> &'static str {
        self.day_name
    }
    pub fn hour_name(&self) -> &'static str {
        self.hour_name
    }
    /// Human-readable source of the reading: the lunar date, or the numbers.
    pub fn description(&self) -> &str {
        &self.description
    }
    /// `[month, day, hour]` palace indices.
    pub fn path(&self) -> [u8; 3] {
        self.path
    }
}

/// Life-event categories, each tied to a fixed first-leg palace.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Marriage,
    Wealth,
    Health,
    Legal,
    Travel,
}

impl EventType {
    pub const ALL: [EventType; 5] = [
        EventType::Marriage,
        EventType::Wealth,
        EventType::Health,
        EventType::Legal,
        EventType::Travel,
    ];

    /// Palace used directly as the month leg's result. No category starts at
    /// Kong Wang.
    pub fn start_palace(self) -> Palace {
        match self {
            EventType::Marriage => Palace::DaAn,
            EventType::Wealth => Palace::LiuLian,
            EventType::Health => Palace::SuXi,
            EventType::Legal => Palace::ChiKou,
            EventType::Travel => Palace::XiaoJi,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EventType::Marriage => "marriage",
            EventType::Wealth => "wealth",
            EventType::Health => "health",
            EventType::Legal => "legal",
            EventType::Travel => "travel",
        }
    }
}

impl Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|event| event.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown event type {s:?}"))
    }
}

/// Three chained counts: `a` from Da An, `b` from the first landing, `c` from
/// the second.
fn three_legs(a: i64, b: i64, c: i64) -> (Palace, Palace, Palace) {
    let month = Palace::DaAn.count(a);
    let day = month.count(b);
    (month, day, day.count(c))
}

/// Reading for a local civil timestamp, counting the lunar month, the lunar
/// day and the time branch.
///
/// ```
/// use chrono::NaiveDate;
/// use xiaoliuren::calculate_by_date;
///
/// // 二〇二四年正月初一, 午時
/// let at = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap().and_hms_opt(12, 0, 0).unwrap();
/// let result = calculate_by_date(at).unwrap();
///
/// assert_eq!([1, 1, 1], result.path());
/// assert_eq!("二〇二四年正月初一", result.description());
/// ```
pub fn calculate_by_date(at: NaiveDateTime) -> Result<DivinationResult> {
    let facts = CalendarFacts::from_datetime(at)?;
    let (month, day, hour) = three_legs(
        facts.lunar_month.into(),
        facts.lunar_day.into(),
        facts.time_branch.into(),
    );
    Ok(DivinationResult::new(
        month,
        day,
        hour,
        facts.lunar.to_string(),
    ))
}

/// Reading for three arbitrary integers, used in place of month, day and time
/// branch.
///
/// ```
/// use xiaoliuren::calculate_by_numbers;
///
/// assert_eq!([2, 4, 1], calculate_by_numbers(2, 3, 4).path());
/// ```
pub fn calculate_by_numbers(a: i64, b: i64, c: i64) -> DivinationResult {
    let (month, day, hour) = three_legs(a, b, c);
    DivinationResult::new(month, day, hour, format!("Numbers: {}, {}, {}", a, b, c))
}

/// The three numbers derived from a text: its length in characters (at least
/// 1), the sum of its code points, and its first code point (1 when empty).
///
/// ```
/// use xiaoliuren::divination::text_numbers;
///
/// assert_eq!((1, 0, 1), text_numbers(""));
/// assert_eq!((1, 97, 97), text_numbers("a"));
/// ```
pub fn text_numbers(text: &str) -> (i64, i64, i64) {
    let len = text.chars().count().max(1) as i64;
    let sum = text.chars().map(|c| i64::from(u32::from(c))).sum();
    let first = text.chars().next().map_or(1, |c| i64::from(u32::from(c)));
    (len, sum, first)
}

/// Reading for a text, via [`text_numbers`] and [`calculate_by_numbers`].
pub fn calculate_by_text(text: &str) -> DivinationResult {
    let (a, b, c) = text_numbers(text);
    calculate_by_numbers(a, b, c)
}

/// Reading for a life-event category at a local civil timestamp.
///
/// The category's fixed palace is the month leg's result; the day and hour
/// legs count the lunar day and time branch as [`calculate_by_date`] does.
/// Unrecognized categories start at Da An.
///
/// ```
/// use chrono::NaiveDate;
/// use xiaoliuren::calculate_by_event;
///
/// // 二〇二四年正月初五, 子時
/// let at = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap().and_hms_opt(23, 30, 0).unwrap();
/// let result = calculate_by_event("legal", at).unwrap();
///
/// assert_eq!([4, 2, 2], result.path());
/// ```
pub fn calculate_by_event(event: &str, at: NaiveDateTime) -> Result<DivinationResult> {
    let month = match event.parse::<EventType>() {
        Ok(event) => event.start_palace(),
        Err(reason) => {
            debug!(%reason, "falling back to Da An");
            Palace::DaAn
        }
    };
    let facts = CalendarFacts::from_datetime(at)?;
    let day = month.count(facts.lunar_day.into());
    let hour = day.count(facts.time_branch.into());
    Ok(DivinationResult::new(
        month,
        day,
        hour,
        format!("Event: {}, {}", event.trim(), facts.lunar),
    ))
}

/// Parses a caller-supplied integer, surrounding whitespace allowed.
///
/// ```
/// use xiaoliuren::divination::parse_number;
///
/// assert_eq!(-7, parse_number(" -7 ").unwrap());
/// assert!(parse_number("seven").is_err());
/// ```
pub fn parse_number(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|source| Error::InvalidNumericInput {
            input: input.to_owned(),
            source,
        })
}
