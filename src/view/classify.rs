//! Stateless classifiers from qualitative labels to presentation-neutral tags.
//!
//! Every function here is total: unrecognized input lands in an explicit
//! `Unknown`/`Neutral` arm.

use serde::Serialize;

use crate::models::{DataQuality, TrendDirection};
use crate::view::common::Tone;

/// Base category of a trend arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendCategory {
    Up,
    Down,
    Flat,
    Unknown,
}

/// Trend arrow: base category plus the "strong" modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendIcon {
    pub category: TrendCategory,
    pub strong: bool,
}

impl TrendIcon {
    /// Text marker for plain-text output.
    pub fn glyph(&self) -> &'static str {
        match (self.category, self.strong) {
            (TrendCategory::Up, true) => "⇈",
            (TrendCategory::Up, false) => "↑",
            (TrendCategory::Down, true) => "⇊",
            (TrendCategory::Down, false) => "↓",
            (TrendCategory::Flat, _) => "→",
            (TrendCategory::Unknown, _) => "?",
        }
    }

    pub fn tone(&self) -> Tone {
        match self.category {
            TrendCategory::Up => Tone::Positive,
            TrendCategory::Down => Tone::Negative,
            TrendCategory::Flat | TrendCategory::Unknown => Tone::Neutral,
        }
    }
}

pub fn trend_icon(direction: TrendDirection) -> TrendIcon {
    let (category, strong) = match direction {
        TrendDirection::Increasing => (TrendCategory::Up, false),
        TrendDirection::StronglyIncreasing => (TrendCategory::Up, true),
        TrendDirection::Decreasing => (TrendCategory::Down, false),
        TrendDirection::StronglyDecreasing => (TrendCategory::Down, true),
        TrendDirection::Stable => (TrendCategory::Flat, false),
        TrendDirection::Unknown => (TrendCategory::Unknown, false),
    };
    TrendIcon { category, strong }
}

pub fn trend_icon_str(direction: &str) -> TrendIcon {
    trend_icon(TrendDirection::parse(direction))
}

/// Three-tier weight: only `Excellent` and `Poor` stand out.
pub fn quality_style(quality: DataQuality) -> Tone {
    match quality {
        DataQuality::Excellent => Tone::Positive,
        DataQuality::Poor => Tone::Negative,
        DataQuality::Fair | DataQuality::Estimated | DataQuality::Unknown => Tone::Neutral,
    }
}

pub fn quality_style_str(quality: &str) -> Tone {
    quality_style(DataQuality::parse(quality))
}

/// Sign of a growth rate. Exactly zero (and NaN) is neutral; a missing rate
/// is the caller's "no data" case.
pub fn growth_color(rate: f64) -> Tone {
    if rate > 0.0 {
        Tone::Positive
    } else if rate < 0.0 {
        Tone::Negative
    } else {
        Tone::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_icon_categories() {
        assert_eq!(
            trend_icon(TrendDirection::Increasing),
            TrendIcon {
                category: TrendCategory::Up,
                strong: false,
            }
        );
        assert_eq!(
            trend_icon(TrendDirection::StronglyIncreasing),
            TrendIcon {
                category: TrendCategory::Up,
                strong: true,
            }
        );
        assert_eq!(
            trend_icon(TrendDirection::StronglyDecreasing).category,
            TrendCategory::Down
        );
        assert!(trend_icon(TrendDirection::StronglyDecreasing).strong);
        assert_eq!(trend_icon(TrendDirection::Stable).category, TrendCategory::Flat);
        assert_eq!(trend_icon(TrendDirection::Unknown).category, TrendCategory::Unknown);
    }

    #[test]
    fn test_trend_icon_str_unrecognized() {
        let icon = trend_icon_str("volatile");
        assert_eq!(icon.category, TrendCategory::Unknown);
        assert!(!icon.strong);
        assert_eq!(icon.glyph(), "?");
        assert_eq!(trend_icon_str("strongly_decreasing").glyph(), "⇊");
    }

    #[test]
    fn test_quality_style_tiers() {
        let excellent = quality_style_str("excellent");
        let poor = quality_style_str("poor");
        assert_ne!(excellent, poor);
        assert_eq!(excellent, Tone::Positive);
        assert_eq!(poor, Tone::Negative);

        assert_eq!(quality_style_str("fair"), Tone::Neutral);
        assert_eq!(quality_style_str("estimated"), Tone::Neutral);
        assert_eq!(quality_style_str("unknown"), Tone::Neutral);
        assert_eq!(quality_style_str("something else"), Tone::Neutral);
    }

    #[test]
    fn test_growth_color() {
        assert_eq!(growth_color(0.0), Tone::Neutral);
        assert_eq!(growth_color(-0.0), Tone::Neutral);
        assert_eq!(growth_color(5.0), Tone::Positive);
        assert_eq!(growth_color(-3.0), Tone::Negative);
        assert_eq!(growth_color(f64::NAN), Tone::Neutral);
    }
}
