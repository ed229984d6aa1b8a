//! Localized display text, keyed by palace and language.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::divination::EventType;
use crate::palace::Palace;

/// Display language.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Zh,
    En,
}

impl FromStr for Lang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "cn" => Ok(Self::Zh),
            "en" => Ok(Self::En),
            other => Err(format!("unknown language {other:?}, expected zh or en")),
        }
    }
}

/// Interpretation of a palace in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalaceText {
    pub name: &'static str,
    /// The traditional four-line verse.
    pub meaning: &'static str,
    pub keywords: [&'static str; 3],
    pub detail: &'static str,
}

/// Ways a reading can be started.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Method {
    Date,
    Number,
    Text,
    Event,
}

/// Interface strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ui {
    pub title: &'static str,
    pub calculating: &'static str,
    /// Labels for the month, day and hour legs.
    pub steps: [&'static str; 3],
    pub result: &'static str,
    pub keywords: &'static str,
}

pub fn palace_text(lang: Lang, palace: Palace) -> &'static PalaceText {
    let table = match lang {
        Lang::Zh => &PALACES_ZH,
        Lang::En => &PALACES_EN,
    };
    &table[usize::from(palace.index()) - 1]
}

/// Short palace name as shown on the board.
pub fn palace_name(lang: Lang, palace: Palace) -> &'static str {
    match lang {
        Lang::Zh => palace.info().cn_name,
        Lang::En => palace.info().name,
    }
}

pub fn event_label(lang: Lang, event: EventType) -> &'static str {
    use EventType::*;
    match (lang, event) {
        (Lang::Zh, Marriage) => "婚姻/杂事",
        (Lang::Zh, Wealth) => "求财/经商",
        (Lang::Zh, Health) => "疾病/健康",
        (Lang::Zh, Legal) => "官司/诉讼",
        (Lang::Zh, Travel) => "出行/旅行",
        (Lang::En, Marriage) => "Marriage/Misc",
        (Lang::En, Wealth) => "Wealth/Business",
        (Lang::En, Health) => "Health/Sickness",
        (Lang::En, Legal) => "Legal/Disputes",
        (Lang::En, Travel) => "Travel/Moving",
    }
}

pub fn method_label(lang: Lang, method: Method) -> &'static str {
    use Method::*;
    match (lang, method) {
        (Lang::Zh, Date) => "时间起卦",
        (Lang::Zh, Number) => "数字起卦",
        (Lang::Zh, Text) => "文字/柳叶起卦",
        (Lang::Zh, Event) => "依事起卦",
        (Lang::En, Date) => "Time Divination",
        (Lang::En, Number) => "Number Divination",
        (Lang::En, Text) => "Text/Object Divination",
        (Lang::En, Event) => "Event Divination",
    }
}

pub fn ui(lang: Lang) -> &'static Ui {
    match lang {
        Lang::Zh => &UI_ZH,
        Lang::En => &UI_EN,
    }
}

static UI_ZH: Ui = Ui {
    title: "小六壬排盘",
    calculating: "起卦运算中...",
    steps: ["初爻定位", "二爻推进", "三爻定局"],
    result: "卦象结果",
    keywords: "关键词",
};

static UI_EN: Ui = Ui {
    title: "Xiao Liu Ren Divination",
    calculating: "Calculating...",
    steps: ["Step 1: Initial", "Step 2: Progress", "Step 3: Final"],
    result: "Result",
    keywords: "Keywords",
};

static PALACES_ZH: [PalaceText; 6] = [
    PalaceText {
        name: "大安",
        meaning: "大安事事昌，求财在坤方，失物去不远，宅舍保安康。",
        keywords: ["吉祥", "安稳", "顺利"],
        detail: "大安为最吉之卦，代表事情稳定、平安、顺利。求财、求官、出行皆吉。",
    },
    PalaceText {
        name: "留连",
        meaning: "留连事难成，求谋日未明，官事只宜缓，去者未回程。",
        keywords: ["拖延", "阻碍", "纠缠"],
        detail: "留连代表事情拖延、不顺、有阻碍。凡事宜缓不宜急，需要耐心等待。",
    },
    PalaceText {
        name: "速喜",
        meaning: "速喜喜来临，求财向南行，失物申未午，逢人路上寻。",
        keywords: ["喜庆", "快速", "吉利"],
        detail: "速喜代表喜事临门，事情会有快速的进展和好的结果。",
    },
    PalaceText {
        name: "赤口",
        meaning: "赤口主口舌，官非切要防，失物速速讨，行人有惊慌。",
        keywords: ["口舌", "争执", "官非"],
        detail: "赤口代表口舌是非、争执、官司。需要小心言行，避免冲突。",
    },
    PalaceText {
        name: "小吉",
        meaning: "小吉最吉昌，路上好商量，阴人来报喜，失物在坤方。",
        keywords: ["吉利", "和合", "顺利"],
        detail: "小吉代表吉利、和合、顺利。虽然不如大安宏大，但也是非常好的卦象。",
    },
    PalaceText {
        name: "空亡",
        meaning: "空亡事不长，阴人小乖张，求财无利益，行人有灾殃。",
        keywords: ["空虚", "无果", "不吉"],
        detail: "空亡代表落空、无结果、不吉。凡事难成，需要谨慎小心。",
    },
];

static PALACES_EN: [PalaceText; 6] = [
    PalaceText {
        name: "Da An (Great Peace)",
        meaning: "Great Peace brings prosperity in all things. Seek wealth in the Southwest. \
                  Lost items are not far. The home is safe and healthy.",
        keywords: ["Auspicious", "Stable", "Smooth"],
        detail: "Da An is the most auspicious sign, representing stability, peace, and \
                 smoothness. It is good for seeking wealth, career, and travel.",
    },
    PalaceText {
        name: "Liu Lian (Lingering)",
        meaning: "Lingering makes things difficult to achieve. Plans are unclear. Legal \
                  matters should be delayed. Those who left have not returned.",
        keywords: ["Delay", "Obstacle", "Entanglement"],
        detail: "Liu Lian represents delay, difficulty, and obstacles. Things should be \
                 taken slowly, not rushed. Patience is required.",
    },
    PalaceText {
        name: "Su Xi (Swift Joy)",
        meaning: "Swift Joy brings happiness. Seek wealth in the South. Lost items are in \
                  the South/Southwest. Meet people on the way.",
        keywords: ["Joy", "Fast", "Lucky"],
        detail: "Su Xi represents approaching joy. Things will progress quickly and have \
                 good results.",
    },
    PalaceText {
        name: "Chi Kou (Red Mouth)",
        meaning: "Red Mouth brings disputes. Beware of official troubles. Seek lost items \
                  quickly. Travelers face panic.",
        keywords: ["Dispute", "Conflict", "Legal Issue"],
        detail: "Chi Kou represents verbal disputes, conflicts, and legal issues. Be careful \
                 with words and avoid conflicts.",
    },
    PalaceText {
        name: "Xiao Ji (Minor Luck)",
        meaning: "Minor Luck is very auspicious. Good discussions on the road. Women bring \
                  good news. Lost items are in the Southwest.",
        keywords: ["Lucky", "Harmony", "Smooth"],
        detail: "Xiao Ji represents luck, harmony, and smoothness. Although not as grand as \
                 Da An, it is still a very good sign.",
    },
    PalaceText {
        name: "Kong Wang (Void)",
        meaning: "Void means things won't last. Villains are tricky. No profit in seeking \
                  wealth. Travelers face disaster.",
        keywords: ["Empty", "No Result", "Inauspicious"],
        detail: "Kong Wang represents emptiness, no result, and bad luck. Things are \
                 difficult to achieve. Caution is advised.",
    },
];
