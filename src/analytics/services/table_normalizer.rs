use crate::analytics::domain::{
    AnalyticsEndpoint, AnalyticsTable, BuildErrorRecord, CaskInstallRecord, CountRow,
    InstallRecord, ItemKind, Metric,
};
use crate::shared::error::AnalyticsError;
use serde_json::{Map, Value};

/// TableNormalizer service turning raw analytics documents into typed tables
///
/// The shape of a document is decided once, from its first item: entries
/// are keyed either by `formula` or by `cask`. Anything else is rejected.
pub struct TableNormalizer;

impl TableNormalizer {
    /// Normalizes the `items` list of an analytics document
    ///
    /// # Arguments
    /// * `source_name` - Where the document came from, for error messages
    /// * `document` - The parsed JSON document
    ///
    /// # Errors
    /// * `AnalyticsError::Schema` if `items` is missing or empty, or its entries are keyed
    ///   by neither `formula` nor `cask`
    /// * `AnalyticsError::Parse` if a count or percent cannot be converted to a number
    pub fn normalize(
        source_name: &str,
        document: &Value,
    ) -> Result<AnalyticsTable, AnalyticsError> {
        let schema_error = |details: &str| AnalyticsError::Schema {
            source_name: source_name.to_string(),
            details: details.to_string(),
        };

        let items = document
            .get("items")
            .and_then(Value::as_array)
            .ok_or_else(|| schema_error("document has no 'items' list"))?;

        let first = items
            .first()
            .and_then(Value::as_object)
            .ok_or_else(|| schema_error("'items' is empty or its first entry is not an object"))?;

        let kind = Self::detect_kind(first)
            .ok_or_else(|| schema_error("items[0] has neither 'formula' nor 'cask'"))?;

        let rows = items
            .iter()
            .enumerate()
            .map(|(idx, item)| Self::normalize_item(source_name, kind, idx, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AnalyticsTable::new(kind, rows))
    }

    fn detect_kind(entry: &Map<String, Value>) -> Option<ItemKind> {
        if entry.contains_key(ItemKind::Formula.key()) {
            Some(ItemKind::Formula)
        } else if entry.contains_key(ItemKind::Cask.key()) {
            Some(ItemKind::Cask)
        } else {
            None
        }
    }

    fn normalize_item(
        source_name: &str,
        kind: ItemKind,
        idx: usize,
        item: &Value,
    ) -> Result<CountRow, AnalyticsError> {
        let name = item
            .get(kind.key())
            .and_then(Value::as_str)
            .ok_or_else(|| AnalyticsError::Schema {
                source_name: source_name.to_string(),
                details: format!("items[{}] has no string '{}' field", idx, kind.key()),
            })?;

        Ok(CountRow {
            name: name.to_string(),
            count: Self::parse_count(item.get("count"))?,
            percent: Self::parse_percent(item.get("percent"))?,
        })
    }

    /// Counts arrive as `"12,345"` strings; plain JSON numbers are accepted too
    pub(crate) fn parse_count(value: Option<&Value>) -> Result<u64, AnalyticsError> {
        let parse_error = |raw: String| AnalyticsError::Parse {
            field: "count".to_string(),
            value: raw,
        };

        match value {
            Some(Value::String(raw)) => raw
                .replace(',', "")
                .trim()
                .parse::<u64>()
                .map_err(|_| parse_error(raw.clone())),
            Some(Value::Number(n)) => n.as_u64().ok_or_else(|| parse_error(n.to_string())),
            Some(other) => Err(parse_error(other.to_string())),
            None => Err(parse_error("<missing>".to_string())),
        }
    }

    pub(crate) fn parse_percent(value: Option<&Value>) -> Result<f64, AnalyticsError> {
        let parse_error = |raw: String| AnalyticsError::Parse {
            field: "percent".to_string(),
            value: raw,
        };

        match value {
            Some(Value::String(raw)) => raw
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|p| p.is_finite())
                .ok_or_else(|| parse_error(raw.clone())),
            Some(Value::Number(n)) => n.as_f64().ok_or_else(|| parse_error(n.to_string())),
            Some(other) => Err(parse_error(other.to_string())),
            None => Err(parse_error("<missing>".to_string())),
        }
    }

    /// Projects a formula-keyed install table onto InstallRecords
    pub fn to_install_records(
        table: &AnalyticsTable,
        endpoint: &AnalyticsEndpoint,
    ) -> Vec<InstallRecord> {
        let on_request = endpoint.metric == Metric::InstallOnRequest;
        table
            .rows()
            .iter()
            .map(|row| {
                InstallRecord::new(
                    row.name.clone(),
                    row.count,
                    row.percent,
                    endpoint.os,
                    endpoint.window,
                    on_request,
                )
            })
            .collect()
    }

    pub fn to_cask_records(
        table: &AnalyticsTable,
        endpoint: &AnalyticsEndpoint,
    ) -> Vec<CaskInstallRecord> {
        table
            .rows()
            .iter()
            .map(|row| CaskInstallRecord {
                cask: row.name.clone(),
                raw_count: row.count,
                percent: row.percent,
                window: endpoint.window,
            })
            .collect()
    }

    pub fn to_build_error_records(
        table: &AnalyticsTable,
        endpoint: &AnalyticsEndpoint,
    ) -> Vec<BuildErrorRecord> {
        table
            .rows()
            .iter()
            .map(|row| BuildErrorRecord {
                formula: row.name.clone(),
                raw_count: row.count,
                percent: row.percent,
                operating_system: endpoint.os,
                window: endpoint.window,
            })
            .collect()
    }
}
