//! 農曆年表數據
//!
//! 每年以一個整數壓縮記錄其月份大小與閏月：
//!
//! - 第 `0..=3` 位：閏月月序，為 0 則無閏月
//! - 第 `4..=15` 位：正月至十二月大小，第 15 位為正月，第 4 位為十二月；1 為大月（30 日），0 為小月（29 日）
//! - 第 16 位：閏月大小，意義同上
//!
//! 支持 1900 至 2100 年，首日為公元 1900 年 1 月 31 日（庚子年正月初一）。

use crate::date::Date;

/// 年表首年
pub const FIRST_YEAR: i32 = 1900;
/// 年表末年
pub const LAST_YEAR: i32 = 2100;
/// 年表首日（1900 年正月初一）的儒略日數
pub const EPOCH_JDN: u32 = 2415051;

/// 一年的月份大小與閏月信息
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct YearInfo {
    /// 年序號，與該年正月初一所在公元年相同
    pub year: i32,
    bits: u32,
}

impl YearInfo {
    /// 取得 `year` 年的年表數據。
    ///
    /// 無數據則返回 `None`。
    pub fn get(year: i32) -> Option<Self> {
        if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
            return None;
        }
        Some(Self {
            year,
            bits: DATA[(year - FIRST_YEAR) as usize],
        })
    }

    /// 閏月月序，無閏月則為 `None`。
    pub fn leap_month(&self) -> Option<u32> {
        match self.bits & 0xf {
            0 => None,
            m => Some(m),
        }
    }

    /// 閏月日數，無閏月則為 0。
    pub fn leap_month_days(&self) -> u32 {
        match self.leap_month() {
            None => 0,
            Some(_) if self.bits & 0x10000 != 0 => 30,
            Some(_) => 29,
        }
    }

    /// 平月 `month` 的日數。
    ///
    /// # Panics
    ///
    /// 若月序號不在 `1..=12` 間則 panic。
    pub fn month_days(&self, month: u32) -> u32 {
        assert!((1..=12).contains(&month), "month {} not in 1..=12", month);
        if self.bits & (0x10000 >> month) != 0 {
            30
        } else {
            29
        }
    }

    /// 全年日數，含閏月。
    pub fn days(&self) -> u32 {
        (1..=12).map(|m| self.month_days(m)).sum::<u32>() + self.leap_month_days()
    }

    /// 該年正月初一所在日期。
    pub fn new_year(&self) -> Date {
        let offset: u32 = (FIRST_YEAR..self.year)
            .filter_map(Self::get)
            .map(|info| info.days())
            .sum();
        Date::from_jdn(EPOCH_JDN + offset)
    }
}

/// 年表末日的次日，即 2101 年正月初一
pub fn end_of_data() -> Date {
    let last = YearInfo::get(LAST_YEAR).expect("last year is in the table");
    last.new_year() + last.days() as i32
}

#[rustfmt::skip]
static DATA: [u32; (LAST_YEAR - FIRST_YEAR + 1) as usize] = [
    // 1900
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2,
    // 1910
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977,
    // 1920
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970,
    // 1930
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950,
    // 1940
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557,
    // 1950
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0,
    // 1960
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0,
    // 1970
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6,
    // 1980
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570,
    // 1990
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0,
    // 2000
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5,
    // 2010
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930,
    // 2020
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530,
    // 2030
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45,
    // 2040
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0,
    // 2050
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0,
    // 2060
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4,
    // 2070
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0,
    // 2080
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160,
    // 2090
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252,
    // 2100
    0x0d520,
];
