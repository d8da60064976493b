//! Financial trends table view model, chart series and derived selections.

use serde::Serialize;

use crate::fmt::{format_growth_rate, format_value};
use crate::models::MetricRecord;
use crate::table::{SortColumn, SortDirection, SortState, derive_view};
use crate::view::classify::{TrendCategory, growth_color, quality_style, trend_icon};
use crate::view::common::{TableViewModel, Tone, ViewCell, ViewRow};

const HEADERS: &[&str] = &["METRIC", "TREND", "GROWTH", "IMPORTANCE", "QUALITY", "LATEST"];
const WIDTHS: &[u16] = &[28, 22, 9, 10, 9, 9];

/// One point of a metric's yearly series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartPoint {
    pub year: i32,
    pub value: f64,
}

/// Year-ascending series for charting.
pub fn chart_series(record: &MetricRecord) -> Vec<ChartPoint> {
    record
        .yearly_values
        .iter()
        .map(|(&year, &value)| ChartPoint { year, value })
        .collect()
}

/// Value of the most recent year, if any.
pub fn latest_value(record: &MetricRecord) -> Option<f64> {
    record.yearly_values.values().next_back().copied()
}

/// Count of metrics per trend category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrendSummary {
    pub up: usize,
    pub down: usize,
    pub flat: usize,
    pub unknown: usize,
    /// Metrics with a strong up or down trend (also counted in `up`/`down`).
    pub strong: usize,
}

impl TrendSummary {
    pub fn total(&self) -> usize {
        self.up + self.down + self.flat + self.unknown
    }
}

pub fn summarize_trends(records: &[MetricRecord]) -> TrendSummary {
    records
        .iter()
        .fold(TrendSummary::default(), |mut summary, record| {
            let icon = trend_icon(record.trend_direction);
            match icon.category {
                TrendCategory::Up => summary.up += 1,
                TrendCategory::Down => summary.down += 1,
                TrendCategory::Flat => summary.flat += 1,
                TrendCategory::Unknown => summary.unknown += 1,
            }
            if icon.strong {
                summary.strong += 1;
            }
            summary
        })
}

/// The `n` most important metrics, highest first. Ties keep input order.
pub fn top_by_importance(records: &[MetricRecord], n: usize) -> Vec<&MetricRecord> {
    let mut rows = derive_view(records, "", SortState::new(SortColumn::ImportanceScore));
    rows.truncate(n);
    rows
}

fn cells(record: &MetricRecord) -> Vec<ViewCell> {
    let icon = trend_icon(record.trend_direction);
    let growth = match record.growth_rate {
        Some(rate) => ViewCell::toned(format_growth_rate(Some(rate)), growth_color(rate)),
        None => ViewCell::plain(format_growth_rate(None)),
    };
    vec![
        ViewCell::plain(record.name.clone()),
        ViewCell::toned(
            format!("{} {}", icon.glyph(), record.trend_direction.as_str()),
            icon.tone(),
        ),
        growth,
        ViewCell::plain(match record.importance_score {
            Some(score) => format!("{:.2}", score),
            None => "N/A".to_string(),
        }),
        ViewCell::toned(
            record.data_quality.as_str().to_string(),
            quality_style(record.data_quality),
        ),
        ViewCell::plain(format_value(latest_value(record))),
    ]
}

/// Builds a UI-agnostic view model for the trends table.
pub fn build_trends_view(
    records: &[MetricRecord],
    search: &str,
    sort: SortState,
) -> TableViewModel {
    let rows: Vec<ViewRow> = derive_view(records, search, sort)
        .into_iter()
        .map(|r| ViewRow {
            id: r.name.clone(),
            cells: cells(r),
            tone: Tone::Neutral,
        })
        .collect();

    let direction = match sort.direction {
        SortDirection::Asc => "asc",
        SortDirection::Desc => "desc",
    };
    let sort_info = format!("[sort: {} {}]", sort.key.as_str(), direction);

    let title = if search.is_empty() {
        format!(" Financial Trends {sort_info} [{} rows] ", rows.len())
    } else {
        format!(
            " Financial Trends {sort_info} (filter: {search}) [{} rows] ",
            rows.len()
        )
    };

    TableViewModel {
        title,
        headers: HEADERS.iter().map(|s| s.to_string()).collect(),
        widths: WIDTHS.to_vec(),
        rows,
        sort_column: sort.key,
        sort_direction: sort.direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DataQuality, TrendDirection};

    fn sample() -> Vec<MetricRecord> {
        vec![
            MetricRecord::new("Revenue")
                .with_trend(TrendDirection::StronglyIncreasing)
                .with_growth_rate(Some(12.5))
                .with_importance(0.95)
                .with_quality(DataQuality::Excellent)
                .with_yearly_value(2022, 1.1e9)
                .with_yearly_value(2021, 9.8e8),
            MetricRecord::new("Operating Expenses")
                .with_trend(TrendDirection::Decreasing)
                .with_growth_rate(Some(-4.0))
                .with_importance(0.6)
                .with_quality(DataQuality::Fair),
            MetricRecord::new("Cash")
                .with_trend(TrendDirection::Stable)
                .with_growth_rate(Some(0.0))
                .with_importance(0.6)
                .with_quality(DataQuality::Poor)
                .with_yearly_value(2022, 45000.0),
            MetricRecord::new("Goodwill").with_importance(0.1),
        ]
    }

    #[test]
    fn test_chart_series_ascending() {
        let records = sample();
        let series = chart_series(&records[0]);
        assert_eq!(
            series,
            vec![
                ChartPoint {
                    year: 2021,
                    value: 9.8e8,
                },
                ChartPoint {
                    year: 2022,
                    value: 1.1e9,
                },
            ]
        );
        assert!(chart_series(&records[3]).is_empty());
    }

    #[test]
    fn test_latest_value() {
        let records = sample();
        assert_eq!(latest_value(&records[0]), Some(1.1e9));
        assert_eq!(latest_value(&records[1]), None);
    }

    #[test]
    fn test_summarize_trends() {
        let summary = summarize_trends(&sample());
        assert_eq!(
            summary,
            TrendSummary {
                up: 1,
                down: 1,
                flat: 1,
                unknown: 1,
                strong: 1,
            }
        );
        assert_eq!(summary.total(), 4);
    }

    #[test]
    fn test_top_by_importance_stable() {
        let records = sample();
        let top: Vec<&str> = top_by_importance(&records, 3)
            .into_iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(top, vec!["Revenue", "Operating Expenses", "Cash"]);
        assert_eq!(top_by_importance(&records, 10).len(), 4);
        assert!(top_by_importance(&records, 0).is_empty());
    }

    #[test]
    fn test_build_trends_view_cells_and_tones() {
        let records = sample();
        let view = build_trends_view(&records, "", SortState::new(SortColumn::GrowthRate));
        assert_eq!(view.headers.len(), view.widths.len());
        assert_eq!(view.rows.len(), 4);

        let ids: Vec<&str> = view.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["Revenue", "Cash", "Operating Expenses", "Goodwill"]);

        let revenue = &view.rows[0].cells;
        assert_eq!(revenue[1].text, "⇈ strongly_increasing");
        assert_eq!(revenue[1].tone, Some(Tone::Positive));
        assert_eq!(revenue[2].text, "+12.50%");
        assert_eq!(revenue[2].tone, Some(Tone::Positive));
        assert_eq!(revenue[4].tone, Some(Tone::Positive));
        assert_eq!(revenue[5].text, "1.10B");

        let cash = &view.rows[1].cells;
        assert_eq!(cash[2].tone, Some(Tone::Neutral));
        assert_eq!(cash[4].tone, Some(Tone::Negative));
        assert_eq!(cash[5].text, "45.00K");

        let goodwill = &view.rows[3].cells;
        assert_eq!(goodwill[2].text, "N/A");
        assert_eq!(goodwill[2].tone, None);
        assert_eq!(goodwill[5].text, "N/A");
    }

    #[test]
    fn test_missing_importance_renders_na_last() {
        let mut records = sample();
        records.push(MetricRecord::new("Deferred Tax"));
        let view = build_trends_view(&records, "", SortState::default());
        let last = view.rows.last().unwrap();
        assert_eq!(last.id, "Deferred Tax");
        assert_eq!(last.cells[3].text, "N/A");
        assert_eq!(view.rows[0].cells[3].text, "0.95");
    }

    #[test]
    fn test_build_trends_view_title_and_filter() {
        let records = sample();
        let view = build_trends_view(&records, "re", SortState::default());
        assert_eq!(view.rows.len(), 1);
        assert_eq!(
            view.title,
            " Financial Trends [sort: importance_score desc] (filter: re) [1 rows] "
        );
    }
}
