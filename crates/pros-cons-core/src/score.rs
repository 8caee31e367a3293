//! Score Calculator
//!
//! Weighted pro/con tally. Nothing here is stored; the tally is recomputed
//! from the items on every render.

use serde::Serialize;

use crate::domain::{ProsConsItem, Side};

/// Percentages at or below this are drawn beside the bar instead of inside it
pub const INSIDE_LABEL_MIN_PERCENT: u32 = 15;

/// Per-side scores and their rounded share of the total
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub pros_score: u32,
    pub cons_score: u32,
    pub total: u32,
    pub pros_percentage: u32,
    pub cons_percentage: u32,
}

/// Where the percentage label goes on the result bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelPlacement {
    Inside,
    Outside,
    Hidden,
}

impl LabelPlacement {
    pub fn for_percentage(percentage: u32) -> Self {
        if percentage > INSIDE_LABEL_MIN_PERCENT {
            LabelPlacement::Inside
        } else if percentage > 0 {
            LabelPlacement::Outside
        } else {
            LabelPlacement::Hidden
        }
    }
}

impl Tally {
    pub fn from_items(items: &[ProsConsItem]) -> Self {
        let (pros_score, cons_score) = items.iter().fold((0u32, 0u32), |(pros, cons), item| {
            let weight = u32::from(item.weight.value());
            match item.side {
                Side::Pro => (pros + weight, cons),
                Side::Con => (pros, cons + weight),
            }
        });
        let total = pros_score + cons_score;

        Self {
            pros_score,
            cons_score,
            total,
            pros_percentage: percentage(pros_score, total),
            cons_percentage: percentage(cons_score, total),
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Pro => self.pros_score,
            Side::Con => self.cons_score,
        }
    }

    pub fn percentage(&self, side: Side) -> u32 {
        match side {
            Side::Pro => self.pros_percentage,
            Side::Con => self.cons_percentage,
        }
    }

    /// The heavier side, or None on a tie (including the empty list)
    pub fn leader(&self) -> Option<Side> {
        match self.pros_score.cmp(&self.cons_score) {
            std::cmp::Ordering::Greater => Some(Side::Pro),
            std::cmp::Ordering::Less => Some(Side::Con),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// round(100 * part / total), halves rounded up; 0 when total is 0.
///
/// Each side is rounded on its own, so the two shares may sum to 99 or 101.
fn percentage(part: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (200 * part + total) / (2 * total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ItemId, Weight};

    fn items(rows: &[(Side, u8)]) -> Vec<ProsConsItem> {
        rows.iter()
            .enumerate()
            .map(|(i, (side, w))| {
                ProsConsItem::new(ItemId(i as u64 + 1), format!("arg {}", i), Weight::try_from_u8(*w).unwrap(), *side)
            })
            .collect()
    }

    #[test]
    fn test_empty_list() {
        let tally = Tally::from_items(&[]);
        assert_eq!(tally, Tally::default());
        assert_eq!(tally.leader(), None);
    }

    #[test]
    fn test_even_split() {
        let tally = Tally::from_items(&items(&[(Side::Pro, 3), (Side::Con, 3)]));
        assert_eq!(tally.pros_score, 3);
        assert_eq!(tally.cons_score, 3);
        assert_eq!(tally.pros_percentage, 50);
        assert_eq!(tally.cons_percentage, 50);
    }

    #[test]
    fn test_weighted_split() {
        let tally = Tally::from_items(&items(&[(Side::Pro, 5), (Side::Pro, 1), (Side::Con, 2)]));
        assert_eq!(tally.pros_score, 6);
        assert_eq!(tally.cons_score, 2);
        assert_eq!(tally.total, 8);
        assert_eq!(tally.pros_percentage, 75);
        assert_eq!(tally.cons_percentage, 25);
        assert_eq!(tally.leader(), Some(Side::Pro));
    }

    #[test]
    fn test_single_side() {
        let tally = Tally::from_items(&items(&[(Side::Pro, 2), (Side::Pro, 4)]));
        assert_eq!(tally.pros_percentage, 100);
        assert_eq!(tally.cons_percentage, 0);

        let tally = Tally::from_items(&items(&[(Side::Con, 1)]));
        assert_eq!(tally.pros_percentage, 0);
        assert_eq!(tally.cons_percentage, 100);
    }

    #[test]
    fn test_independent_rounding_may_exceed_100() {
        // 1/8 = 12.5% and 7/8 = 87.5% both round up
        let tally = Tally::from_items(&items(&[(Side::Pro, 1), (Side::Con, 5), (Side::Con, 2)]));
        assert_eq!(tally.pros_percentage, 13);
        assert_eq!(tally.cons_percentage, 88);
    }

    #[test]
    fn test_exact_half_rounds_up() {
        // 23/40 is exactly 57.5%; float arithmetic lands just below it
        assert_eq!(percentage(23, 40), 58);
        assert_eq!(percentage(17, 40), 43);
    }

    #[test]
    fn test_percentage_matches_formula() {
        for pros in 0..=15u32 {
            for cons in 0..=15u32 {
                let total = pros + cons;
                let expected = if total > 0 {
                    (100.0 * pros as f64 / total as f64 + 0.5).floor() as u32
                } else {
                    0
                };
                assert_eq!(percentage(pros, total), expected, "pros={} cons={}", pros, cons);
            }
        }
    }

    #[test]
    fn test_label_placement() {
        assert_eq!(LabelPlacement::for_percentage(75), LabelPlacement::Inside);
        assert_eq!(LabelPlacement::for_percentage(15), LabelPlacement::Outside);
        assert_eq!(LabelPlacement::for_percentage(1), LabelPlacement::Outside);
        assert_eq!(LabelPlacement::for_percentage(0), LabelPlacement::Hidden);
    }
}
