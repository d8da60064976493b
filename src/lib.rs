//! trendview - financial trends table engine.
//!
//! Turns an analysis payload into metric records and derives the filtered,
//! sorted, formatted views shown by the trends and comparison pages:
//! - `fmt` - value and file size formatting
//! - `models` - metric record, trend direction, data quality
//! - `table` - sort state, search filtering, stable derived view
//! - `view` - classifiers and UI-agnostic table/chart view models
//! - `payload` - backend JSON payload and conversion into records

pub mod error;
pub mod fmt;
pub mod models;
pub mod payload;
pub mod table;
pub mod view;

pub use error::{Error, Result};
pub use models::{DataQuality, MetricRecord, TrendDirection};
pub use table::{SortColumn, SortDirection, SortState, TableRow, TableState, derive_view};
