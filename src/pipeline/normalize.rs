//! Flattens raw measurement objects into the working table.

use crate::measurements::raw_table::RawTable;
use crate::pipeline::columns::{renamed, CONCENTRATION, LATITUDE, LOCATION, LONGITUDE, REQUIRED};
use crate::pipeline::error::PipelineError;
use polars::prelude::*;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

type FlatRecord<'a> = BTreeMap<String, &'a Value>;

/// Flattens nested objects into `.`-joined keys and applies the column renames.
///
/// The result always leads with `Location`, `Latitude`, `Longitude` and `Concentration`
/// (null where the API left them out), followed by every other field in name order, so the
/// layout never depends on key order in the JSON. A `null` field does not create a column on
/// its own.
pub fn normalize(raw: &RawTable) -> Result<DataFrame, PipelineError> {
    let rows: Vec<FlatRecord> = raw.records().iter().map(flatten_record).collect();

    let other_fields: BTreeSet<&str> = rows
        .iter()
        .flat_map(|row| row.keys().map(String::as_str))
        .filter(|name| !REQUIRED.contains(name))
        .collect();

    let mut columns = Vec::with_capacity(REQUIRED.len() + other_fields.len());
    columns.push(string_column(LOCATION, &rows));
    columns.push(float_column(LATITUDE, &rows));
    columns.push(float_column(LONGITUDE, &rows));
    columns.push(float_column(CONCENTRATION, &rows));
    columns.extend(other_fields.into_iter().map(|name| inferred_column(name, &rows)));

    Ok(DataFrame::new(columns)?)
}

fn flatten_record(record: &Map<String, Value>) -> FlatRecord<'_> {
    let mut flat = BTreeMap::new();
    flatten_into(None, record, &mut flat);
    flat.into_iter()
        .map(|(key, value)| (renamed(&key).to_string(), value))
        .collect()
}

fn flatten_into<'a>(prefix: Option<&str>, object: &'a Map<String, Value>, out: &mut FlatRecord<'a>) {
    for (key, value) in object {
        let name = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key.clone(),
        };
        match value {
            Value::Object(nested) => flatten_into(Some(&name), nested, out),
            Value::Null => {}
            leaf => {
                out.insert(name, leaf);
            }
        }
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_column(name: &str, rows: &[FlatRecord]) -> Column {
    let values: Vec<Option<String>> = rows
        .iter()
        .map(|row| row.get(name).map(|v| as_text(v)))
        .collect();
    Column::new(name.into(), values)
}

fn float_column(name: &str, rows: &[FlatRecord]) -> Column {
    let values: Vec<Option<f64>> = rows
        .iter()
        .map(|row| row.get(name).and_then(|v| as_float(v)))
        .collect();
    Column::new(name.into(), values)
}

fn bool_column(name: &str, rows: &[FlatRecord]) -> Column {
    let values: Vec<Option<bool>> = rows
        .iter()
        .map(|row| row.get(name).and_then(|v| v.as_bool()))
        .collect();
    Column::new(name.into(), values)
}

/// Numbers stay numbers and booleans stay booleans; any mix falls back to text.
fn inferred_column(name: &str, rows: &[FlatRecord]) -> Column {
    let mut present = rows.iter().filter_map(|row| row.get(name));
    if present.clone().all(|v| v.is_number()) {
        float_column(name, rows)
    } else if present.all(|v| v.is_boolean()) {
        bool_column(name, rows)
    } else {
        string_column(name, rows)
    }
}
