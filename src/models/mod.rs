//! Metric record and its qualitative annotations.

use std::collections::BTreeMap;

use serde::Serialize;

/// Direction of a metric's trend as reported by the analysis backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    StronglyIncreasing,
    Decreasing,
    StronglyDecreasing,
    Stable,
    /// Anything the backend sent that we do not recognize, or nothing at all.
    #[default]
    Unknown,
}

impl TrendDirection {
    /// Total parser: unrecognized input maps to [`TrendDirection::Unknown`].
    pub fn parse(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "increasing" => Self::Increasing,
            "strongly_increasing" => Self::StronglyIncreasing,
            "decreasing" => Self::Decreasing,
            "strongly_decreasing" => Self::StronglyDecreasing,
            "stable" => Self::Stable,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Increasing => "increasing",
            Self::StronglyIncreasing => "strongly_increasing",
            Self::Decreasing => "decreasing",
            Self::StronglyDecreasing => "strongly_decreasing",
            Self::Stable => "stable",
            Self::Unknown => "unknown",
        }
    }
}

/// Reliability of the numbers behind a metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DataQuality {
    Excellent,
    Fair,
    Poor,
    Estimated,
    #[default]
    Unknown,
}

impl DataQuality {
    /// Total parser: unrecognized input maps to [`DataQuality::Unknown`].
    pub fn parse(s: &str) -> Self {
        match normalize_label(s).as_str() {
            "excellent" => Self::Excellent,
            "fair" => Self::Fair,
            "poor" => Self::Poor,
            "estimated" => Self::Estimated,
            _ => Self::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Estimated => "estimated",
            Self::Unknown => "unknown",
        }
    }
}

/// Lowercases and maps `-`/space separators to `_`.
fn normalize_label(s: &str) -> String {
    s.trim()
        .chars()
        .map(|c| match c {
            '-' | ' ' => '_',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// One named financial indicator with its time series.
///
/// `name` is unique within a loaded result set. `yearly_values` iterates in
/// ascending year order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricRecord {
    pub name: String,
    pub trend_direction: TrendDirection,
    pub growth_rate: Option<f64>,
    /// `None` when the backend sent nothing usable; sorts lowest.
    pub importance_score: Option<f64>,
    pub data_quality: DataQuality,
    pub yearly_values: BTreeMap<i32, f64>,
}

impl MetricRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            trend_direction: TrendDirection::Unknown,
            growth_rate: None,
            importance_score: None,
            data_quality: DataQuality::Unknown,
            yearly_values: BTreeMap::new(),
        }
    }

    pub fn with_growth_rate(mut self, rate: Option<f64>) -> Self {
        self.growth_rate = rate;
        self
    }

    pub fn with_importance(mut self, score: f64) -> Self {
        self.importance_score = Some(score);
        self
    }

    pub fn with_trend(mut self, direction: TrendDirection) -> Self {
        self.trend_direction = direction;
        self
    }

    pub fn with_quality(mut self, quality: DataQuality) -> Self {
        self.data_quality = quality;
        self
    }

    pub fn with_yearly_value(mut self, year: i32, value: f64) -> Self {
        self.yearly_values.insert(year, value);
        self
    }
}
