// src/analysis/card.rs
use serde::Serialize;

use crate::config::consts::{
    CORE_SLOT_MIN, EXCLUDED_SLOT_MAX, INFINITE_SCORE, MAX_COPIES, NOT_APPLICABLE, SUMMARY_ROW_NAME,
};

/// Swap score of one card in one direction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SwapScore {
    /// Direction not allowed (already at 0 or 3), or not scored yet.
    #[default]
    Unscored,
    /// Inverse of the penalty after the step.
    Finite(f64),
    /// The step leaves the deck with zero penalty.
    Infinite,
}

impl SwapScore {
    pub fn from_penalty(penalty: f64) -> Self {
        if penalty == 0.0 { SwapScore::Infinite } else { SwapScore::Finite(1.0 / penalty) }
    }

    /// Numeric view for sorting: unscored sorts below everything.
    pub fn sort_value(&self) -> f64 {
        match self {
            SwapScore::Unscored => -1.0,
            SwapScore::Finite(v) => *v,
            SwapScore::Infinite => f64::INFINITY,
        }
    }

    /// Four decimals, `INF`, or `0.0000` when unscored.
    pub fn display(&self) -> String {
        match self {
            SwapScore::Unscored => format!("{:.4}", 0.0),
            SwapScore::Finite(v) => format!("{v:.4}"),
            SwapScore::Infinite => s!(INFINITE_SCORE),
        }
    }

    /// Short marker used in the editor table.
    pub fn symbol(&self) -> &'static str {
        match self {
            SwapScore::Infinite => "N/A",
            SwapScore::Finite(v) if v.is_nan() => "N/A",
            SwapScore::Finite(v) if *v > 1.0 => "O",
            SwapScore::Finite(v) if *v > 0.5 => "△",
            SwapScore::Finite(_) | SwapScore::Unscored => "X",
        }
    }
}

/// Where a card sits in the deck judging by its weighted average.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SlotKind {
    Core,
    Flex,
    Excluded,
}

impl SlotKind {
    pub fn of(average: f64) -> Self {
        if average > CORE_SLOT_MIN {
            SlotKind::Core
        } else if average < EXCLUDED_SLOT_MAX {
            SlotKind::Excluded
        } else {
            SlotKind::Flex
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SlotKind::Core => "고정칸",
            SlotKind::Flex => "선택칸",
            SlotKind::Excluded => "제외칸",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CardStat {
    pub name: String,
    pub weighted_average: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub rounded_average: i32,
    pub delta: f64,
    pub adjusted_count: i32,
    pub removability: SwapScore,
    pub addability: SwapScore,
}

impl CardStat {
    pub fn new(name: impl Into<String>, weighted_average: f64, variance: f64) -> Self {
        let rounded_average = weighted_average.round_ties_even() as i32;
        Self {
            name: name.into(),
            weighted_average,
            variance,
            std_dev: variance.sqrt(),
            rounded_average,
            delta: weighted_average - rounded_average as f64,
            adjusted_count: rounded_average.clamp(0, MAX_COPIES),
            removability: SwapScore::Unscored,
            addability: SwapScore::Unscored,
        }
    }

    pub fn slot(&self) -> SlotKind {
        SlotKind::of(self.weighted_average)
    }

    pub fn to_result(&self) -> CardResult {
        CardResult {
            name: self.name.clone(),
            average: format!("{:.2}", self.weighted_average),
            variance: format!("{:.2}", self.variance),
            std_dev: format!("{:.2}", self.std_dev),
            rounded_average: self.rounded_average.to_string(),
            delta: format!("{:.2}", self.delta),
            adjusted_count: self.adjusted_count.to_string(),
            removability_score: self.removability.display(),
            addability_score: self.addability.display(),
        }
    }
}

/// One rendered output row. Every field is display text so the summary
/// row can carry `N/A`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CardResult {
    pub name: String,
    pub average: String,
    pub variance: String,
    pub std_dev: String,
    pub rounded_average: String,
    pub delta: String,
    pub adjusted_count: String,
    pub removability_score: String,
    pub addability_score: String,
}

impl CardResult {
    pub const HEADERS: [&'static str; 9] = [
        "name",
        "average",
        "variance",
        "std_dev",
        "rounded_average",
        "delta",
        "adjusted_count",
        "removability_score",
        "addability_score",
    ];

    pub fn summary(deck_size: i32) -> Self {
        let size = deck_size.to_string();
        let na = || s!(NOT_APPLICABLE);
        Self {
            name: s!(SUMMARY_ROW_NAME),
            average: size.clone(),
            variance: na(),
            std_dev: na(),
            rounded_average: na(),
            delta: size.clone(),
            adjusted_count: size,
            removability_score: na(),
            addability_score: na(),
        }
    }

    pub fn cells(&self) -> Vec<String> {
        row![
            self.name.as_str(),
            self.average.as_str(),
            self.variance.as_str(),
            self.std_dev.as_str(),
            self.rounded_average.as_str(),
            self.delta.as_str(),
            self.adjusted_count.as_str(),
            self.removability_score.as_str(),
            self.addability_score.as_str(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(CardStat::new("a", 2.5, 0.0).rounded_average, 2);
        assert_eq!(CardStat::new("a", 1.5, 0.0).rounded_average, 2);
        assert_eq!(CardStat::new("a", 0.5, 0.0).rounded_average, 0);
        assert_eq!(CardStat::new("a", 0.51, 0.0).rounded_average, 1);
    }

    #[test]
    fn adjusted_count_is_clamped() {
        assert_eq!(CardStat::new("a", 4.0, 0.0).adjusted_count, 3);
        assert_eq!(CardStat::new("a", -1.0, 0.0).adjusted_count, 0);
        assert_eq!(CardStat::new("a", 4.0, 0.0).rounded_average, 4);
    }

    #[test]
    fn derived_fields() {
        let c = CardStat::new("x", 1.4, 0.16);
        assert!((c.std_dev - 0.4).abs() < 1e-12);
        assert!((c.delta - 0.4).abs() < 1e-12);
        assert_eq!(c.slot(), SlotKind::Flex);
        assert_eq!(CardStat::new("y", 2.9, 0.0).slot(), SlotKind::Core);
        assert_eq!(CardStat::new("z", 0.1, 0.0).slot(), SlotKind::Excluded);
    }

    #[test]
    fn score_display_and_symbols() {
        assert_eq!(SwapScore::Unscored.display(), "0.0000");
        assert_eq!(SwapScore::Finite(1.23456).display(), "1.2346");
        assert_eq!(SwapScore::Infinite.display(), "INF");

        assert_eq!(SwapScore::Infinite.symbol(), "N/A");
        assert_eq!(SwapScore::Unscored.symbol(), "X");
        assert_eq!(SwapScore::Finite(1.5).symbol(), "O");
        assert_eq!(SwapScore::Finite(0.75).symbol(), "△");
        assert_eq!(SwapScore::Finite(0.5).symbol(), "X");
        assert_eq!(SwapScore::Finite(f64::NAN).symbol(), "N/A");
    }

    #[test]
    fn zero_penalty_is_infinite() {
        assert_eq!(SwapScore::from_penalty(0.0), SwapScore::Infinite);
        assert_eq!(SwapScore::from_penalty(4.0), SwapScore::Finite(0.25));
    }

    #[test]
    fn result_formatting() {
        let r = CardStat::new("Card", 3.0, 0.0).to_result();
        assert_eq!(
            r.cells(),
            row!["Card", "3.00", "0.00", "0.00", "3", "0.00", "3", "0.0000", "0.0000"]
        );

        let sum = CardResult::summary(40);
        assert_eq!(sum.name, "총 합");
        assert_eq!(sum.average, "40");
        assert_eq!(sum.delta, "40");
        assert_eq!(sum.adjusted_count, "40");
        assert_eq!(sum.variance, "N/A");
        assert_eq!(sum.rounded_average, "N/A");
        assert_eq!(sum.addability_score, "N/A");
    }
}
