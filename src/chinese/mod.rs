//! Chinese calendar
//!
//! Note: 為方便處理諸多術語，本模塊文檔用中文。
//!
//! 本程序採用預製的農曆年表換算夏曆，見 [`table`]。

use std::fmt::{self as std_fmt, Display};

use crate::date::Date;

pub mod fmt;
pub mod table;

/// 一個農曆年，自正月初一至次年正月初一前日。
///
/// 支持的年份取決於年表數據，見 [`table`]。
///
/// # 用例
///
/// ```
/// use xiaoliuren::Date;
/// use xiaoliuren::chinese::{LunarDate, LunarYear, Month::*};
///
/// let date = Date::from_gregorian(2000, 1, 1).unwrap();
/// let year = LunarYear::from_date(date).unwrap();
///
/// assert_eq!(1999, year.year);
/// assert_eq!(
///     Ok(LunarDate { year: 1999, month: Common(11), day: 25 }),
///     year.ymd_for(date),
/// );
/// ```
#[derive(Debug, Clone)]
pub struct LunarYear {
    /// 序號，為正月初一所在的公元年
    pub year: i32,
    /// 該年的年表數據
    pub info: table::YearInfo,
    /// 全部月首，包括次年正月以標記本年最末日
    pub months: Vec<NewMoon>,
}
/// 月首信息
#[derive(Debug, Copy, Clone)]
pub struct NewMoon {
    /// 月名
    pub month: Month,
    /// 月首所在日期
    pub date: Date,
}
/// 月名，`Common` 為平月，`Leap` 為閏月。
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Month {
    Common(u32),
    Leap(u32),
}
impl Month {
    /// 取得月序號，無論平閏。
    pub fn num(&self) -> u32 {
        use Month::*;
        *match self {
            Common(v) | Leap(v) => v,
        }
    }
    /// 閏月為 `true`，平月為 `false`
    pub fn is_leap(&self) -> bool {
        matches!(self, Self::Leap(_))
    }
    /// 取得月名的文本形式，十一、十二月稱「冬月」「臘月」。
    pub fn name(&self) -> String {
        fmt::month(*self)
    }
}

/// 農曆日期
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct LunarDate {
    /// 年序號，同 [`LunarYear::year`]
    pub year: i32,
    /// 月名
    pub month: Month,
    /// 日序號，`1..=30`
    pub day: u32,
}

impl LunarDate {
    /// 將給定日期轉為農曆。
    ///
    /// 若年表無該日資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use xiaoliuren::Date;
    /// use xiaoliuren::chinese::LunarDate;
    ///
    /// let date = Date::from_gregorian(2024, 2, 10).unwrap();
    /// assert_eq!("二〇二四年正月初一", LunarDate::from_date(date).unwrap().to_string());
    /// ```
    pub fn from_date(date: Date) -> Option<Self> {
        LunarYear::from_date(date)?.ymd_for(date).ok()
    }
}

impl Display for LunarDate {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(
            f,
            "{}年{}{}",
            fmt::year(self.year),
            fmt::month(self.month),
            fmt::day(self.day)
        )
    }
}

impl LunarYear {
    /// 取得農曆 `year` 年。
    ///
    /// 若年表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use xiaoliuren::chinese::LunarYear;
    ///
    /// let year = LunarYear::new(2017).unwrap();
    /// assert_eq!(14, year.months.len()); // 含閏六月及次年正月
    /// ```
    pub fn new(year: i32) -> Option<Self> {
        use Month::*;

        let info = table::YearInfo::get(year)?;
        let mut months = Vec::with_capacity(14);
        let mut date = info.new_year();
        for num in 1..=12 {
            months.push(NewMoon {
                month: Common(num),
                date,
            });
            date = date + info.month_days(num) as i32;
            if info.leap_month() == Some(num) {
                months.push(NewMoon {
                    month: Leap(num),
                    date,
                });
                date = date + info.leap_month_days() as i32;
            }
        }
        months.push(NewMoon {
            month: Common(1),
            date,
        });

        Some(LunarYear { year, info, months })
    }
    /// 依特定日期取得其所在年。
    ///
    /// 若年表無該年資料則返回 `None`。
    ///
    /// # 用例
    ///
    /// ```
    /// use xiaoliuren::Date;
    /// use xiaoliuren::chinese::LunarYear;
    ///
    /// let date = Date::from_gregorian(2000, 2, 5).unwrap();
    /// let year = LunarYear::from_date(date).unwrap();
    ///
    /// assert_eq!(2000, year.year);
    /// ```
    pub fn from_date(date: Date) -> Option<Self> {
        let mut y = date.gregorian().0.clamp(table::FIRST_YEAR, table::LAST_YEAR);
        loop {
            let year = Self::new(y)?;
            let (start, end) = year.bounds();

            if (start..end).contains(&date) {
                return Some(year);
            }

            y += if date < start { -1 } else { 1 };
        }
    }

    /// 取得給定日期在該年的農曆日期。
    ///
    /// 若所給日期不在該年，則回報 `Err` 並指出該日期在該年之前還是之後。
    ///
    /// # 用例
    ///
    /// ```
    /// use xiaoliuren::Date;
    /// use xiaoliuren::chinese::{LunarYear, Month::*, OtherYear};
    ///
    /// let year = LunarYear::new(2017).unwrap();
    ///
    /// let date = Date::from_gregorian(2017, 7, 23).unwrap();
    /// assert_eq!(Leap(6), year.ymd_for(date).unwrap().month);
    ///
    /// let date = Date::from_gregorian(2018, 2, 16).unwrap();
    /// assert_eq!(Err(OtherYear::After), year.ymd_for(date));
    /// ```
    pub fn ymd_for(&self, date: Date) -> Result<LunarDate, OtherYear> {
        let (begin, end) = self.bounds();

        if date < begin {
            return Err(OtherYear::Before);
        } else if date >= end {
            return Err(OtherYear::After);
        }

        let idx = self.months.partition_point(|m| m.date <= date) - 1;
        let m = &self.months[idx];
        Ok(LunarDate {
            year: self.year,
            month: m.month,
            day: (date - m.date + 1) as u32,
        })
    }

    /// 本年首日及次年首日
    fn bounds(&self) -> (Date, Date) {
        (self.months[0].date, self.months[self.months.len() - 1].date)
    }
}

/// 表示給定日期不在該年，並指出其在前還是在後。
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum OtherYear {
    Before,
    After,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_date() {
        let dataset = [
            (Some(2016), (2017, 1, 27)),
            (Some(2017), (2017, 1, 28)),
            (Some(2017), (2018, 2, 15)),
            (Some(2018), (2018, 2, 16)),
            (Some(1900), (1900, 1, 31)),
            (None, (1900, 1, 30)),
            (Some(2100), (2101, 1, 28)),
            (None, (2101, 1, 29)),
        ];
        for (std, (y, m, d)) in dataset {
            assert_eq!(
                std,
                LunarYear::from_date(Date::from_gregorian(y, m, d).unwrap()).map(|a| a.year)
            );
        }
    }

    #[test]
    fn months() {
        let year = LunarYear::new(2000).unwrap();
        let stds = [
            (1, "2000-02-05"),
            (2, "2000-03-06"),
            (3, "2000-04-05"),
            (4, "2000-05-04"),
            (5, "2000-06-02"),
            (6, "2000-07-02"),
            (7, "2000-07-31"),
            (8, "2000-08-29"),
            (9, "2000-09-28"),
            (10, "2000-10-27"),
            (11, "2000-11-26"),
            (12, "2000-12-26"),
            (1, "2001-01-24"),
        ];
        assert_eq!(stds.len(), year.months.len());
        for (std, month) in stds.iter().zip(&year.months) {
            assert_eq!(Month::Common(std.0), month.month);
            assert_eq!(std.1, month.date.iso_gregorian());
        }
    }

    #[test]
    fn leap_months() {
        let stds = [
            (1, "2017-01-28"),
            (2, "2017-02-26"),
            (3, "2017-03-28"),
            (4, "2017-04-26"),
            (5, "2017-05-26"),
            (6, "2017-06-24"),
            (-6, "2017-07-23"),
            (7, "2017-08-22"),
            (8, "2017-09-20"),
            (9, "2017-10-20"),
            (10, "2017-11-18"),
            (11, "2017-12-18"),
            (12, "2018-01-17"),
            (1, "2018-02-16"),
        ];
        let year = LunarYear::new(2017).unwrap();
        for (std, month) in stds.iter().zip(&year.months) {
            let std_month = if std.0 > 0 {
                Month::Common(std.0 as u32)
            } else {
                Month::Leap(-std.0 as u32)
            };
            assert_eq!(
                (std_month, std.1.into()),
                (month.month, month.date.iso_gregorian())
            );
        }
        assert_eq!(stds.len(), year.months.len());
    }

    #[test]
    fn dates() {
        use Month::*;
        use OtherYear::*;
        let data = [
            ((2017, 1, 28), Ok((Common(1), 1))),
            ((2017, 7, 22), Ok((Common(6), 29))),
            ((2017, 7, 23), Ok((Leap(6), 1))),
            ((2017, 12, 17), Ok((Common(10), 30))),
            ((2017, 12, 18), Ok((Common(11), 1))),
            ((2018, 2, 15), Ok((Common(12), 30))),
            ((2017, 1, 27), Err(Before)),
            ((2018, 2, 16), Err(After)),
        ];
        let year = LunarYear::new(2017).unwrap();
        for ((y, m, d), std) in data {
            let got = year
                .ymd_for(Date::from_gregorian(y, m, d).unwrap())
                .map(|ld| (ld.month, ld.day));
            assert_eq!(std, got, "{y:04}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn display() {
        for (std, (y, m, d)) in [
            ("一九九九年冬月廿五", (2000, 1, 1)),
            ("二〇一七年閏六月初一", (2017, 7, 23)),
            ("二〇二四年正月初五", (2024, 2, 14)),
            ("一九〇〇年正月初一", (1900, 1, 31)),
        ] {
            let date = Date::from_gregorian(y, m, d).unwrap();
            assert_eq!(std, LunarDate::from_date(date).unwrap().to_string());
        }
    }
}
