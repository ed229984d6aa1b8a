//! Staged reveal of a reading: the month, day and hour legs replayed as
//! clockwise steps around the six palaces.

use std::io::Write;
use std::thread;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::palace::Palace;

/// One of the three counting legs.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Month,
    Day,
    Hour,
}

/// A leg as seen by the presentation layer.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Leg {
    pub stage: Stage,
    pub from: Palace,
    pub to: Palace,
    /// Clockwise steps from `from` to `to`, `0..=5`.
    pub distance: u8,
}

impl Leg {
    fn new(stage: Stage, from: Palace, to: Palace) -> Self {
        Self {
            stage,
            from,
            to,
            distance: distance(from, to),
        }
    }

    /// Palaces highlighted in turn, from `from` to `to` inclusive.
    pub fn highlights(&self) -> Vec<Palace> {
        let mut seq = Vec::with_capacity(usize::from(self.distance) + 1);
        let mut current = self.from;
        seq.push(current);
        for _ in 0..self.distance {
            current = current.next();
            seq.push(current);
        }
        seq
    }
}

/// Clockwise distance between two palaces; 0 when they are the same.
///
/// ```
/// use xiaoliuren::palace::Palace;
/// use xiaoliuren::reveal::distance;
///
/// assert_eq!(2, distance(Palace::DaAn, Palace::SuXi));
/// assert_eq!(1, distance(Palace::KongWang, Palace::DaAn));
/// assert_eq!(0, distance(Palace::ChiKou, Palace::ChiKou));
/// ```
pub fn distance(from: Palace, to: Palace) -> u8 {
    (to.index() + 6 - from.index()) % 6
}

/// Splits a `[month, day, hour]` path into its three legs. The month leg
/// always starts at Da An.
pub fn legs(path: [u8; 3]) -> [Leg; 3] {
    let [month, day, hour] = path.map(|i| Palace::from_index(i.into()));
    [
        Leg::new(Stage::Month, Palace::DaAn, month),
        Leg::new(Stage::Day, month, day),
        Leg::new(Stage::Hour, day, hour),
    ]
}

/// Delays of the staged reveal, in milliseconds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Before the first leg.
    pub initial_ms: u64,
    /// On the starting palace of a leg.
    pub highlight_ms: u64,
    /// Per clockwise step.
    pub step_ms: u64,
    /// After the last step of a leg.
    pub settle_ms: u64,
    /// Between legs.
    pub pause_ms: u64,
    /// After the hour leg.
    pub final_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            initial_ms: 500,
            highlight_ms: 300,
            step_ms: 200,
            settle_ms: 200,
            pause_ms: 600,
            final_ms: 800,
        }
    }
}

impl Timing {
    /// No delays at all.
    pub const INSTANT: Timing = Timing {
        initial_ms: 0,
        highlight_ms: 0,
        step_ms: 0,
        settle_ms: 0,
        pause_ms: 0,
        final_ms: 0,
    };
}

fn sleep_ms(ms: u64) {
    if ms > 0 {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Plays the reveal, writing one line per leg as its highlights advance.
///
/// `label` names a leg and `name` a palace, so the caller chooses the display
/// language.
pub fn play<W, L, N>(
    out: &mut W,
    path: [u8; 3],
    timing: &Timing,
    label: L,
    name: N,
) -> std::io::Result<()>
where
    W: Write,
    L: Fn(Stage) -> &'static str,
    N: Fn(Palace) -> &'static str,
{
    sleep_ms(timing.initial_ms);
    for (i, leg) in legs(path).iter().enumerate() {
        if i > 0 {
            sleep_ms(timing.pause_ms);
        }
        write!(out, "{}:", label(leg.stage))?;
        for (step, palace) in leg.highlights().into_iter().enumerate() {
            write!(out, " {}", name(palace))?;
            out.flush()?;
            sleep_ms(if step == 0 {
                timing.highlight_ms
            } else {
                timing.step_ms
            });
        }
        writeln!(out)?;
        sleep_ms(timing.settle_ms);
    }
    sleep_ms(timing.final_ms);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palace::ALL_PALACES;

    #[test]
    fn distances() {
        for from in ALL_PALACES {
            for to in ALL_PALACES {
                let d = distance(from, to);
                assert!(d < 6);
                assert_eq!(to, from.count(i64::from(d) + 1));
            }
        }
    }

    #[test]
    fn split_path() {
        let [month, day, hour] = legs([2, 4, 1]);
        assert_eq!((Palace::DaAn, Palace::LiuLian, 1), (month.from, month.to, month.distance));
        assert_eq!((Palace::LiuLian, Palace::ChiKou, 2), (day.from, day.to, day.distance));
        assert_eq!((Palace::ChiKou, Palace::DaAn, 3), (hour.from, hour.to, hour.distance));
        assert_eq!(
            vec![Palace::ChiKou, Palace::XiaoJi, Palace::KongWang, Palace::DaAn],
            hour.highlights()
        );
    }

    #[test]
    fn same_palace_still_flashes() {
        let [month, day, hour] = legs([1, 1, 1]);
        for leg in [month, day, hour] {
            assert_eq!(0, leg.distance);
            assert_eq!(vec![Palace::DaAn], leg.highlights());
        }
    }

    #[test]
    fn play_instant() {
        let mut out = Vec::new();
        play(
            &mut out,
            [2, 4, 1],
            &Timing::INSTANT,
            |stage| match stage {
                Stage::Month => "M",
                Stage::Day => "D",
                Stage::Hour => "H",
            },
            |palace| palace.info().cn_name,
        )
        .unwrap();
        assert_eq!(
            "M: 大安 留连\nD: 留连 速喜 赤口\nH: 赤口 小吉 空亡 大安\n",
            String::from_utf8(out).unwrap()
        );
    }
}
