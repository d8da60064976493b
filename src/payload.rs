//! Analysis payload as returned by the backend, and its conversion into
//! [`MetricRecord`]s.
//!
//! Conversion is lenient: numeric fields accept numbers or numeric strings,
//! everything else becomes `None`; unrecognized labels become `Unknown`.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{DataQuality, MetricRecord, TrendDirection};

/// Top-level payload: `{ trends: { financial_trends: [...] }, summary, metadata }`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default)]
    pub trends: TrendsSection,
    #[serde(default)]
    pub summary: Option<Value>,
    #[serde(default)]
    pub metadata: Option<Metadata>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrendsSection {
    #[serde(default)]
    pub financial_trends: Vec<RawTrend>,
}

/// One entry of `financial_trends`, kept untyped until conversion.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrend {
    #[serde(default)]
    pub metric_name: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub trend_direction: Option<Value>,
    #[serde(default)]
    pub growth_rate: Option<Value>,
    #[serde(default)]
    pub importance_score: Option<Value>,
    #[serde(default)]
    pub data_quality: Option<Value>,
    #[serde(default)]
    pub yearly_values: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Metadata {
    /// RFC 3339, or a naive `YYYY-MM-DDTHH:MM:SS[.f]` taken as UTC; anything
    /// else is `None`.
    #[serde(default, deserialize_with = "lenient_datetime")]
    pub analysis_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source_file: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
}

fn lenient_datetime<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(value) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if let Ok(dt) = serde_json::from_value::<DateTime<Utc>>(value.clone()) {
        return Ok(Some(dt));
    }
    let parsed = lenient_str(Some(&value)).and_then(|raw| {
        NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| naive.and_utc())
    });
    if parsed.is_none() {
        debug!(value = %value, "unparseable analysis_date");
    }
    Ok(parsed)
}

/// Number or numeric string; anything else (including NaN/inf) is `None`.
fn lenient_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }?;
    n.is_finite().then_some(n)
}

fn lenient_str(value: Option<&Value>) -> Option<&str> {
    match value? {
        Value::String(s) => Some(s.as_str()),
        _ => None,
    }
}

fn yearly_values(value: Option<&Value>) -> BTreeMap<i32, f64> {
    let Some(Value::Object(map)) = value else {
        return BTreeMap::new();
    };
    map.iter()
        .filter_map(|(year, v)| {
            let year = year.trim().parse::<i32>().ok()?;
            let v = lenient_number(Some(v))?;
            Some((year, v))
        })
        .collect()
}

impl RawTrend {
    /// Converts to a record; `None` when the entry has no usable name.
    pub fn to_record(&self) -> Option<MetricRecord> {
        let name = lenient_str(self.metric_name.as_ref())
            .or_else(|| lenient_str(self.name.as_ref()))
            .map(str::trim)
            .filter(|n| !n.is_empty())?;

        Some(MetricRecord {
            name: name.to_string(),
            trend_direction: lenient_str(self.trend_direction.as_ref())
                .map(TrendDirection::parse)
                .unwrap_or_default(),
            growth_rate: lenient_number(self.growth_rate.as_ref()),
            importance_score: lenient_number(self.importance_score.as_ref()),
            data_quality: lenient_str(self.data_quality.as_ref())
                .map(DataQuality::parse)
                .unwrap_or_default(),
            yearly_values: yearly_values(self.yearly_values.as_ref()),
        })
    }
}

impl AnalysisPayload {
    /// Builds the record list for one result set.
    ///
    /// Entries without a name are skipped; for duplicate names the first
    /// occurrence wins.
    pub fn to_records(&self) -> Vec<MetricRecord> {
        let mut seen = HashSet::new();
        let mut records = Vec::with_capacity(self.trends.financial_trends.len());
        for (index, raw) in self.trends.financial_trends.iter().enumerate() {
            let Some(record) = raw.to_record() else {
                debug!(index, "skipping trend entry without a name");
                continue;
            };
            if !seen.insert(record.name.clone()) {
                warn!(metric = %record.name, index, "duplicate metric name, keeping first");
                continue;
            }
            records.push(record);
        }
        records
    }
}

/// Parses a payload from JSON text.
pub fn parse_payload(json: &str) -> Result<AnalysisPayload> {
    serde_json::from_str(json).map_err(|source| Error::Parse {
        context: "input".to_string(),
        source,
    })
}

/// Reads and parses a payload file.
pub fn load_payload(path: &Path) -> Result<AnalysisPayload> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::Parse {
        context: path.display().to_string(),
        source,
    })
}
