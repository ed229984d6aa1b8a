//! Plain-text report of a reading.

use std::fmt::Write;

use crate::divination::DivinationResult;
use crate::i18n::{self, Lang, Method};
use crate::reveal::Stage;

/// Label of a leg in the given language.
pub fn stage_label(lang: Lang, stage: Stage) -> &'static str {
    let steps = &i18n::ui(lang).steps;
    match stage {
        Stage::Month => steps[0],
        Stage::Day => steps[1],
        Stage::Hour => steps[2],
    }
}

/// Renders the reading: source, the three landings, then the interpretation
/// of the hour palace.
///
/// ```
/// use xiaoliuren::calculate_by_numbers;
/// use xiaoliuren::i18n::{Lang, Method};
/// use xiaoliuren::render::report;
///
/// let text = report(&calculate_by_numbers(2, 3, 4), Method::Number, Lang::En);
/// assert!(text.contains("Liu Lian -> Chi Kou -> Da An"));
/// ```
pub fn report(result: &DivinationResult, method: Method, lang: Lang) -> String {
    let ui = i18n::ui(lang);
    let text = i18n::palace_text(lang, result.hour_palace());
    let landings = [result.month_palace(), result.day_palace(), result.hour_palace()]
        .map(|palace| i18n::palace_name(lang, palace))
        .join(" -> ");

    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "{} · {}", ui.title, i18n::method_label(lang, method));
    let _ = writeln!(out, "{}", result.description());
    let _ = writeln!(out, "{landings}");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}: {}", ui.result, text.name);
    let _ = writeln!(out, "\"{}\"", text.meaning);
    let _ = writeln!(out, "{}: {}", ui.keywords, text.keywords.join(", "));
    let _ = writeln!(out, "{}", text.detail);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::divination::calculate_by_numbers;

    #[test]
    fn chinese_report() {
        let text = report(&calculate_by_numbers(1, 1, 1), Method::Number, Lang::Zh);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!("小六壬排盘 · 数字起卦", lines[0]);
        assert_eq!("Numbers: 1, 1, 1", lines[1]);
        assert_eq!("大安 -> 大安 -> 大安", lines[2]);
        assert_eq!("卦象结果: 大安", lines[4]);
        assert_eq!("关键词: 吉祥, 安稳, 顺利", lines[6]);
    }

    #[test]
    fn english_report() {
        let text = report(&calculate_by_numbers(6, 1, 1), Method::Text, Lang::En);
        assert!(text.starts_with("Xiao Liu Ren Divination · Text/Object Divination\n"));
        assert!(text.contains("Result: Kong Wang (Void)"));
    }

    #[test]
    fn stage_labels() {
        assert_eq!("二爻推进", stage_label(Lang::Zh, Stage::Day));
        assert_eq!("Step 1: Initial", stage_label(Lang::En, Stage::Month));
    }
}
