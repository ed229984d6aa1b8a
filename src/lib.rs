//! Xiao Liu Ren (小六壬) divination on the Chinese lunisolar calendar.
//!
//! A reading counts three times around six palaces (大安, 留连, 速喜, 赤口,
//! 小吉, 空亡): the month leg starts at Da An, the day leg starts where the
//! month leg landed, and the hour leg starts where the day leg landed. The
//! counts come from a date and time, three numbers, a text, or a life-event
//! category plus a date and time.
//!
//! # Examples
//!
//! By three numbers:
//!
//! ```
//! use xiaoliuren::{Palace, calculate_by_numbers};
//!
//! let result = calculate_by_numbers(2, 3, 4);
//!
//! assert_eq!([2, 4, 1], result.path());
//! assert_eq!(Palace::DaAn, result.hour_palace());
//! ```
//!
//! By date and time, through the lunar calendar:
//!
//! ```
//! use chrono::NaiveDate;
//! use xiaoliuren::calculate_by_date;
//!
//! let at = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap().and_hms_opt(0, 30, 0).unwrap();
//! let result = calculate_by_date(at).unwrap();
//!
//! assert_eq!("一九九九年冬月廿五", result.description());
//! assert_eq!([5, 5, 5], result.path());
//! ```
//!
//! The lunar calendar itself:
//!
//! ```
//! use xiaoliuren::Date;
//! use xiaoliuren::chinese::{LunarDate, Month::*};
//!
//! let date = Date::from_gregorian(2017, 7, 23).unwrap();
//! let lunar = LunarDate::from_date(date).unwrap();
//!
//! assert_eq!(Leap(6), lunar.month);
//! assert_eq!(1, lunar.day);
//! ```

pub mod calendar;
pub mod chinese;
pub mod config;
pub mod date;
pub mod divination;
pub mod error;
pub mod i18n;
#[cfg(feature = "cli")]
pub mod logger;
pub mod palace;
pub mod render;
pub mod reveal;

pub use date::Date;
pub use divination::{
    DivinationResult, EventType, calculate_by_date, calculate_by_event, calculate_by_numbers,
    calculate_by_text,
};
pub use error::{Error, Result};
pub use palace::{Palace, count_from, get_palace};
