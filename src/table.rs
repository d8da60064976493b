//! Generic table state: sorting and filtering.
//!
//! Rows are never reordered in place. Every call to [`derive_view`] builds a
//! fresh filtered and sorted list of references.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::MetricRecord;

/// Sortable columns of the trends table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    GrowthRate,
    ImportanceScore,
}

impl SortColumn {
    /// Direction used when the user switches to this column.
    pub fn default_direction(&self) -> SortDirection {
        match self {
            Self::Name => SortDirection::Asc,
            Self::GrowthRate | Self::ImportanceScore => SortDirection::Desc,
        }
    }

    /// Parses the wire name (`name`, `growth_rate`, `importance_score`).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "name" => Some(Self::Name),
            "growth_rate" => Some(Self::GrowthRate),
            "importance_score" => Some(Self::ImportanceScore),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::GrowthRate => "growth_rate",
            Self::ImportanceScore => "importance_score",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub key: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortState {
    fn default() -> Self {
        Self::new(SortColumn::ImportanceScore)
    }
}

impl SortState {
    /// Sort by `key` in its default direction.
    pub fn new(key: SortColumn) -> Self {
        Self {
            key,
            direction: key.default_direction(),
        }
    }

    /// Header click: same column flips direction, another column resets it.
    pub fn toggle(&mut self, key: SortColumn) {
        if self.key == key {
            self.direction = self.direction.flipped();
        } else {
            *self = Self::new(key);
        }
    }
}

/// Sort value for one cell, borrowed from the row. `Missing` orders below
/// every number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl SortValue<'_> {
    fn from_number(v: Option<f64>) -> Self {
        match v {
            Some(v) if !v.is_nan() => SortValue::Number(v),
            _ => SortValue::Missing,
        }
    }

    /// Total order: Missing < Number < Text. Mixed kinds never occur within
    /// one column, the rank only keeps the order total.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Text(a), SortValue::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortValue::Missing => 0,
            SortValue::Number(_) => 1,
            SortValue::Text(_) => 2,
        }
    }
}

/// Trait for table row items.
pub trait TableRow {
    /// Sort value for the specified column.
    fn sort_value(&self, column: SortColumn) -> SortValue<'_>;

    /// Check if item matches the (already lowercased) search term.
    fn matches_search(&self, needle: &str) -> bool;
}

impl TableRow for MetricRecord {
    fn sort_value(&self, column: SortColumn) -> SortValue<'_> {
        match column {
            SortColumn::Name => SortValue::Text(&self.name),
            SortColumn::GrowthRate => SortValue::from_number(self.growth_rate),
            SortColumn::ImportanceScore => SortValue::from_number(self.importance_score),
        }
    }

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// Returns the filtered and sorted view of `items`.
///
/// Filtering is a case-insensitive substring match; an empty search keeps
/// everything. The sort is stable and direction flips the comparator, so
/// tied rows keep their input order in both directions.
pub fn derive_view<'a, T: TableRow>(items: &'a [T], search: &str, sort: SortState) -> Vec<&'a T> {
    let needle = search.to_lowercase();
    let mut rows: Vec<&T> = items
        .iter()
        .filter(|item| needle.is_empty() || item.matches_search(&needle))
        .collect();

    rows.sort_by(|a, b| {
        let cmp = a.sort_value(sort.key).compare(&b.sort_value(sort.key));
        match sort.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    });
    rows
}

/// Owner of a loaded result set plus its sort and search state.
#[derive(Debug, Clone)]
pub struct TableState<T: TableRow> {
    /// All items in load order. Never reordered.
    items: Vec<T>,
    pub sort: SortState,
    pub search: String,
}

impl<T: TableRow> TableState<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            sort: SortState::default(),
            search: String::new(),
        }
    }

    /// Replaces the result set wholesale (new analysis response).
    pub fn replace(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn toggle_sort(&mut self, key: SortColumn) {
        self.sort.toggle(key);
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
    }

    /// Filtered and sorted rows for the current state.
    pub fn view(&self) -> Vec<&T> {
        derive_view(&self.items, &self.search, self.sort)
    }
}
