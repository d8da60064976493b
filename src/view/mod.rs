//! UI-agnostic view models.
//!
//! [`trends::build_trends_view`] turns metric records plus sort/search state
//! into a [`common::TableViewModel`]. A frontend maps the tones to its own
//! styling; the CLI renders them as plain text.

pub mod classify;
pub mod common;
pub mod trends;

pub use classify::{
    TrendCategory, TrendIcon, growth_color, quality_style, quality_style_str, trend_icon,
    trend_icon_str,
};
pub use common::{TableViewModel, Tone, ViewCell, ViewRow};
pub use trends::{
    ChartPoint, TrendSummary, build_trends_view, chart_series, latest_value, summarize_trends,
    top_by_importance,
};
