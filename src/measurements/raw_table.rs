//! The undecoded measurement list of one response.

use crate::measurements::error::DecodeError;
use serde_json::{Map, Value};

const RESULTS_KEY: &str = "results";

/// The measurement objects found under the `results` key of a response, in response order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    records: Vec<Map<String, Value>>,
}

impl RawTable {
    pub fn from_records(records: Vec<Map<String, Value>>) -> Self {
        Self { records }
    }

    /// Decodes a response body.
    ///
    /// A `results` value of `null` or `[]` gives an empty table. A body without a `results`
    /// key is an error.
    pub fn from_json_str(body: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(body)?;
        Self::from_json(value)
    }

    pub fn from_json(value: Value) -> Result<Self, DecodeError> {
        let Value::Object(mut body) = value else {
            return Err(DecodeError::NotAnObject);
        };
        let results = match body.remove(RESULTS_KEY) {
            None => return Err(DecodeError::MissingResults),
            Some(Value::Null) => return Ok(Self::default()),
            Some(Value::Array(results)) => results,
            Some(_) => return Err(DecodeError::ResultsNotArray),
        };

        let records = results
            .into_iter()
            .enumerate()
            .map(|(index, record)| match record {
                Value::Object(fields) => Ok(fields),
                _ => Err(DecodeError::RecordNotObject { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { records })
    }

    pub fn records(&self) -> &[Map<String, Value>] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_results_in_order() -> Result<(), Box<dyn std::error::Error>> {
        let table = RawTable::from_json_str(
            r#"{"meta": {"found": 2}, "results": [{"location": "A", "value": 1.0}, {"location": "B", "value": 2.0}]}"#,
        )?;
        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[1]["location"], "B");
        Ok(())
    }

    #[test]
    fn test_empty_or_null_results_give_empty_table() -> Result<(), Box<dyn std::error::Error>> {
        assert!(RawTable::from_json_str(r#"{"results": []}"#)?.is_empty());
        assert!(RawTable::from_json_str(r#"{"results": null}"#)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_decode_errors() {
        assert!(matches!(
            RawTable::from_json_str("<html>busy</html>"),
            Err(DecodeError::InvalidJson(_))
        ));
        assert!(matches!(
            RawTable::from_json_str("[1, 2]"),
            Err(DecodeError::NotAnObject)
        ));
        assert!(matches!(
            RawTable::from_json_str(r#"{"meta": {}}"#),
            Err(DecodeError::MissingResults)
        ));
        assert!(matches!(
            RawTable::from_json_str(r#"{"results": {"value": 1}}"#),
            Err(DecodeError::ResultsNotArray)
        ));
        assert!(matches!(
            RawTable::from_json_str(r#"{"results": [{"value": 1}, 7]}"#),
            Err(DecodeError::RecordNotObject { index: 1 })
        ));
    }
}
