use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::config::GeneratorConfig;

/// Upper bound of the heuristic score (4 class points + 2 length points).
pub const MAX_SCORE: u8 = 6;

/// Length at which the first bonus point is awarded.
pub const LONG_LENGTH_THRESHOLD: usize = 12;

/// Length at which the second bonus point is awarded.
pub const VERY_LONG_LENGTH_THRESHOLD: usize = 16;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum StrengthLabel {
    #[strum(serialize = "Very weak")]
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    #[strum(serialize = "Very strong")]
    VeryStrong,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "camelCase")]
pub enum MeterColor {
    Red,
    Orange,
    Yellow,
    EmeraldLight,
    EmeraldDark,
}

/// Label tier table, indexed by `max(0, score - 1)`. Scores 0 and 1 both
/// land on the first entry.
pub const LABELS: [StrengthLabel; 6] = [
    StrengthLabel::VeryWeak,
    StrengthLabel::Weak,
    StrengthLabel::Fair,
    StrengthLabel::Good,
    StrengthLabel::Strong,
    StrengthLabel::VeryStrong,
];

/// Meter color table, indexed by `clamp(score - 2, 0, 4)`.
pub const METER_COLORS: [MeterColor; 5] = [
    MeterColor::Red,
    MeterColor::Orange,
    MeterColor::Yellow,
    MeterColor::EmeraldLight,
    MeterColor::EmeraldDark,
];

/// Total over all of `u8`: out-of-range scores clamp into the table.
pub fn label_for(score: u8) -> StrengthLabel {
    let idx = score.saturating_sub(1).min(LABELS.len() as u8 - 1);
    LABELS[idx as usize]
}

/// Total over all of `u8`: out-of-range scores clamp into the table.
pub fn color_for(score: u8) -> MeterColor {
    let idx = score.saturating_sub(2).min(METER_COLORS.len() as u8 - 1);
    METER_COLORS[idx as usize]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthScore {
    pub value: u8,
    pub label: StrengthLabel,
    pub color: MeterColor,
}

impl StrengthScore {
    /// Meter fill in `0.0..=1.0`.
    pub fn ratio(&self) -> f32 {
        self.value as f32 / MAX_SCORE as f32
    }
}

/// Scores the configuration, not any generated text: one point per enabled
/// class, one point at each length threshold, clamped to `MAX_SCORE`.
/// Pure and deterministic; consumes no randomness.
pub fn score(config: &GeneratorConfig) -> StrengthScore {
    let mut value = config.enabled_classes().len() as u8;
    if config.length >= LONG_LENGTH_THRESHOLD {
        value += 1;
    }
    if config.length >= VERY_LONG_LENGTH_THRESHOLD {
        value += 1;
    }
    let value = value.min(MAX_SCORE);

    StrengthScore {
        value,
        label: label_for(value),
        color: color_for(value),
    }
}

/// Size of the working alphabet the configuration draws from.
pub fn pool_size(config: &GeneratorConfig) -> usize {
    config
        .enabled_classes()
        .iter()
        .map(|c| c.pool(config.exclude_ambiguous).len())
        .sum()
}

/// Advisory entropy estimate in bits (`length * log2(pool_size)`).
/// Display-only companion to the heuristic score; never feeds it.
pub fn entropy_bits(config: &GeneratorConfig) -> f64 {
    let pool = pool_size(config);
    if pool == 0 {
        return 0.0;
    }
    config.length as f64 * (pool as f64).log2()
}
