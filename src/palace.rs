//! The six palaces and the counting primitive every reading is built from.

use serde::Serialize;

/// One of the six palaces, cyclically ordered `1..=6`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Palace {
    DaAn = 1,
    LiuLian = 2,
    SuXi = 3,
    ChiKou = 4,
    XiaoJi = 5,
    KongWang = 6,
}

/// All palaces in counting order.
pub const ALL_PALACES: [Palace; 6] = [
    Palace::DaAn,
    Palace::LiuLian,
    Palace::SuXi,
    Palace::ChiKou,
    Palace::XiaoJi,
    Palace::KongWang,
];

/// Fixed identity of a palace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PalaceInfo {
    pub palace: Palace,
    pub name: &'static str,
    pub cn_name: &'static str,
    pub element: &'static str,
    pub direction: &'static str,
}

#[rustfmt::skip]
pub static PALACES: [PalaceInfo; 6] = [
    PalaceInfo { palace: Palace::DaAn, name: "Da An", cn_name: "大安", element: "Wood", direction: "East" },
    PalaceInfo { palace: Palace::LiuLian, name: "Liu Lian", cn_name: "留连", element: "Water", direction: "North" },
    PalaceInfo { palace: Palace::SuXi, name: "Su Xi", cn_name: "速喜", element: "Fire", direction: "South" },
    PalaceInfo { palace: Palace::ChiKou, name: "Chi Kou", cn_name: "赤口", element: "Metal", direction: "West" },
    PalaceInfo { palace: Palace::XiaoJi, name: "Xiao Ji", cn_name: "小吉", element: "Wood", direction: "North" },
    PalaceInfo { palace: Palace::KongWang, name: "Kong Wang", cn_name: "空亡", element: "Earth", direction: "Center" },
];

impl Palace {
    /// Normalizes any integer onto the cycle, so `7` is Da An and `0` is
    /// Kong Wang.
    pub fn from_index(index: i64) -> Self {
        ALL_PALACES[(i128::from(index) - 1).rem_euclid(6) as usize]
    }

    /// Position in the cycle, `1..=6`.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Fixed descriptor of the palace.
    pub fn info(self) -> &'static PalaceInfo {
        &PALACES[self as usize - 1]
    }

    /// Palace reached by counting `offset` positions starting at `self`,
    /// see [`count_from`].
    pub fn count(self, offset: i64) -> Self {
        Self::from_index(count_from(i64::from(self.index()), offset).into())
    }

    /// The next palace clockwise.
    pub fn next(self) -> Self {
        Self::from_index(i64::from(self.index()) + 1)
    }
}

impl From<Palace> for u8 {
    fn from(palace: Palace) -> u8 {
        palace.index()
    }
}

/// Returns the descriptor of the palace at `index`, wrapping any integer into
/// `1..=6`.
///
/// ```
/// use xiaoliuren::palace::get_palace;
///
/// assert_eq!("大安", get_palace(7).cn_name);
/// assert_eq!("空亡", get_palace(0).cn_name);
/// ```
pub fn get_palace(index: i64) -> &'static PalaceInfo {
    Palace::from_index(index).info()
}

/// Counts `offset` palaces starting the count at `start`, so counting one
/// lands on `start` itself. Always returns a palace index in `1..=6`.
///
/// ```
/// use xiaoliuren::palace::count_from;
///
/// assert_eq!(3, count_from(3, 1));
/// assert_eq!(4, count_from(2, 3));
/// assert_eq!(6, count_from(1, 0));
/// ```
pub fn count_from(start: i64, offset: i64) -> u8 {
    // i128 keeps the sum exact for any pair of i64s.
    ((i128::from(start) + i128::from(offset) - 2).rem_euclid(6) + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const EDGES: [i64; 11] = [i64::MIN, -13, -7, -6, -1, 0, 1, 5, 6, 7, i64::MAX];

    #[test]
    fn count_stays_in_range() {
        for start in 1..=6 {
            for offset in (-50..=50).chain(EDGES) {
                let idx = count_from(start, offset);
                assert!((1..=6).contains(&idx), "count_from({start}, {offset}) = {idx}");
            }
        }
        for start in EDGES {
            for offset in EDGES {
                assert!((1..=6).contains(&count_from(start, offset)));
            }
        }
    }

    #[test]
    fn counting_one_lands_on_start() {
        for start in 1..=6 {
            assert_eq!(start as u8, count_from(start, 1));
        }
    }

    #[test]
    fn period_six() {
        for start in 1..=6 {
            for offset in -30..=30 {
                assert_eq!(count_from(start, offset), count_from(start, offset + 6));
            }
        }
    }

    #[test]
    fn known_counts() {
        for (std, (start, offset)) in [
            (2, (1, 2)),
            (4, (2, 3)),
            (1, (4, 4)),
            (6, (1, 0)),
            (5, (1, -1)),
            (6, (6, 7)),
        ] {
            assert_eq!(std, count_from(start, offset), "count_from({start}, {offset})");
        }
    }

    #[test]
    fn wraparound() {
        assert_eq!(get_palace(7), get_palace(1));
        assert_eq!(get_palace(0), get_palace(6));
        assert_eq!(get_palace(-6), get_palace(6));
        assert_eq!(Palace::XiaoJi, Palace::from_index(-1));
        assert_eq!(Palace::DaAn, Palace::KongWang.next());
    }

    #[test]
    fn table_matches_enum() {
        for (i, palace) in ALL_PALACES.into_iter().enumerate() {
            assert_eq!(i as u8 + 1, palace.index());
            assert_eq!(palace, palace.info().palace);
            assert_eq!(palace, Palace::from_index(i64::from(palace.index())));
        }
        assert_eq!(Palace::ChiKou, Palace::LiuLian.count(3));
    }
}
