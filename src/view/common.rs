//! UI-agnostic view model types.
//!
//! These types represent presentation data without any dependency on a specific
//! rendering framework. A web frontend maps [`Tone`] to CSS classes, the CLI
//! prints it as a marker.

use serde::Serialize;

use crate::table::{SortColumn, SortDirection};

/// Visual-weight class of a cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// Good news (growth, excellent data).
    Positive,
    /// Bad news (decline, poor data).
    Negative,
    #[default]
    Neutral,
}

impl Tone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Positive => "positive",
            Tone::Negative => "negative",
            Tone::Neutral => "neutral",
        }
    }
}

/// A single table cell with optional tone override.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewCell {
    pub text: String,
    /// `None` = inherit row tone.
    pub tone: Option<Tone>,
}

impl ViewCell {
    pub fn plain(text: String) -> Self {
        Self { text, tone: None }
    }

    pub fn toned(text: String, tone: Tone) -> Self {
        Self {
            text,
            tone: Some(tone),
        }
    }
}

/// One table row, keyed by metric name.
#[derive(Debug, Clone, Serialize)]
pub struct ViewRow {
    pub id: String,
    pub cells: Vec<ViewCell>,
    pub tone: Tone,
}

/// Complete table ready to be rendered by any frontend.
#[derive(Debug, Clone, Serialize)]
pub struct TableViewModel {
    pub title: String,
    pub headers: Vec<String>,
    pub widths: Vec<u16>,
    pub rows: Vec<ViewRow>,
    pub sort_column: SortColumn,
    pub sort_direction: SortDirection,
}
