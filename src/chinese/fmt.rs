//! 格式化日期相關功能

/// 漢數字，第 `1..=9` 項分別為「一」到「九」。為便於格式化日期，第 0 項為「十」。
pub const NUM_CHINESE: &[&str] = &["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 紀年用數字，第 0 項為「〇」。
const YEAR_DIGITS: &[&str] = &["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// 地支，以序號除以 12 的餘數索引，故第 0 項為「亥」。
const BRANCHES: &[&str] = &[
    "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌",
];

/// 取得年名（不含「年」字），逐位轉為漢字。
///
/// # 用例
///
/// ```
/// use xiaoliuren::chinese;
///
/// assert_eq!("二〇二四", chinese::fmt::year(2024));
/// assert_eq!("一九〇〇", chinese::fmt::year(1900));
/// ```
pub fn year(y: i32) -> String {
    y.unsigned_abs()
        .to_string()
        .bytes()
        .map(|b| YEAR_DIGITS[(b - b'0') as usize])
        .collect()
}

/// 取得月名（含「月」字）。十一、十二月稱「冬月」「臘月」。
///
/// # 用例
///
/// ```
/// use xiaoliuren::chinese::{self, Month::*};
///
/// assert_eq!("冬月", chinese::fmt::month(Common(11)));
/// assert_eq!("閏正月", chinese::fmt::month(Leap(1)));
/// ```
///
/// # Panics
///
/// 若月序號不在 `1..=12` 間則 panic。
pub fn month(m: super::Month) -> String {
    let mut rt = String::new();
    if m.is_leap() {
        rt += "閏";
    }
    let num = m.num();
    rt += match num {
        1 => "正",
        2..=9 => NUM_CHINESE[num as usize],
        10 => "十",
        11 => "冬",
        12 => "臘",
        _ => panic!("month {} not in 1..=12", num),
    };
    rt += "月";
    rt
}

/// 取得日名，前十日為「初一」到「初十」，第 21 至 29 日為「廿一」到「廿九」。
///
/// # 用例
///
/// ```
/// use xiaoliuren::chinese;
///
/// assert_eq!("初十", chinese::fmt::day(10));
/// assert_eq!("廿五", chinese::fmt::day(25));
/// assert_eq!("三十", chinese::fmt::day(30));
/// ```
///
/// # Panics
///
/// 若日序號不在 `1..=30` 間則 panic。
pub fn day(d: u32) -> String {
    match d {
        1..=10 => "初",
        11..=19 => "十",
        20 => "二",
        21..=29 => "廿",
        30 => "三",
        _ => panic!("day {} not in 1..=30", d),
    }
    .to_owned()
        + NUM_CHINESE[(d % 10) as usize]
}

/// 時辰序號轉為地支名。`1..=12` 分別為子到亥，子時起於 23 時。
///
/// # 用例
///
/// ```
/// use xiaoliuren::chinese;
///
/// assert_eq!("子", chinese::fmt::time_branch(1));
/// assert_eq!("午", chinese::fmt::time_branch(7));
/// assert_eq!("亥", chinese::fmt::time_branch(12));
/// ```
pub fn time_branch(index: u32) -> &'static str {
    BRANCHES[index.rem_euclid(12) as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year() {
        for (std, y) in [("一九九九", 1999), ("二〇〇〇", 2000), ("二一〇〇", 2100)] {
            assert_eq!(std, year(y));
        }
    }

    #[test]
    fn test_day() {
        for (std, d) in [
            ("初一", 1),
            ("初十", 10),
            ("十一", 11),
            ("二十", 20),
            ("廿一", 21),
            ("三十", 30),
        ] {
            assert_eq!(std, day(d));
        }
    }

    #[test]
    fn test_month() {
        use super::super::Month::*;
        for (std, m) in [
            ("正月", Common(1)),
            ("十月", Common(10)),
            ("臘月", Common(12)),
            ("閏六月", Leap(6)),
        ] {
            assert_eq!(std, month(m));
        }
    }

    #[test]
    fn test_time_branch() {
        let names: String = (1..=12).map(time_branch).collect();
        assert_eq!("子丑寅卯辰巳午未申酉戌亥", names);
    }
}
