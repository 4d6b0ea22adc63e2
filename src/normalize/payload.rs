//! Shape-tolerant decoding of list payloads.
//!
//! The remote service returns lists as a bare array, as `{items: [...]}` or as
//! `{data: [...]}` depending on the endpoint. Each possible structure is a
//! [`ShapeProbe`]; a decoder tries its probes in order and the first match
//! wins.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::types::value_as_u64;

/// One possible payload structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeProbe {
    /// The payload itself is the array.
    Bare,
    /// The array sits under the given key of an object payload.
    Field(&'static str),
}

pub const ITEMS: ShapeProbe = ShapeProbe::Field("items");
pub const DATA: ShapeProbe = ShapeProbe::Field("data");

/// Default probe order for list endpoints.
pub const LIST_PROBES: [ShapeProbe; 3] = [ShapeProbe::Bare, ITEMS, DATA];

/// Probe order for the class roster: `students` wins over `enrollments`.
pub const ROSTER_PROBES: [ShapeProbe; 3] = [
    ShapeProbe::Field("students"),
    ShapeProbe::Field("enrollments"),
    ShapeProbe::Bare,
];

impl ShapeProbe {
    fn matches(self, payload: &Value) -> bool {
        match self {
            ShapeProbe::Bare => payload.is_array(),
            ShapeProbe::Field(key) => payload.get(key).is_some_and(Value::is_array),
        }
    }
}

/// Result of running the probes over one payload.
#[derive(Clone, Debug, PartialEq)]
pub enum ListPayload {
    Matched {
        probe: ShapeProbe,
        items: Vec<Value>,
        /// `total` reported next to the list, when the payload carries one.
        total: Option<u64>,
    },
    Unrecognized,
}

impl ListPayload {
    /// Runs `probes` in order over `payload`.
    pub fn decode(payload: Value, probes: &[ShapeProbe]) -> Self {
        let Some(probe) = probes.iter().copied().find(|probe| probe.matches(&payload)) else {
            return ListPayload::Unrecognized;
        };

        let total = payload.get("total").map(value_as_u64);
        let items = match (probe, payload) {
            (ShapeProbe::Bare, Value::Array(items)) => items,
            (ShapeProbe::Field(key), Value::Object(mut map)) => match map.remove(key) {
                Some(Value::Array(items)) => items,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        ListPayload::Matched {
            probe,
            items,
            total,
        }
    }

    /// Probe that matched, if any.
    pub fn probe(&self) -> Option<ShapeProbe> {
        match self {
            ListPayload::Matched { probe, .. } => Some(*probe),
            ListPayload::Unrecognized => None,
        }
    }

    /// Total reported by the payload, else the number of decoded items.
    pub fn total(&self) -> usize {
        match self {
            ListPayload::Matched { items, total, .. } => {
                total.map_or(items.len(), |total| total as usize)
            }
            ListPayload::Unrecognized => 0,
        }
    }

    pub fn into_items(self) -> Vec<Value> {
        match self {
            ListPayload::Matched { items, .. } => items,
            ListPayload::Unrecognized => Vec::new(),
        }
    }

    /// Deserializes every item, skipping the ones that do not fit `T`.
    pub fn into_records<T: DeserializeOwned>(self) -> Vec<T> {
        self.into_items()
            .into_iter()
            .filter_map(|item| match serde_json::from_value(item) {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("Skipping malformed record: {err}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bare_array_probe() {
        let decoded = ListPayload::decode(json!([{"id": 1}, {"id": 2}]), &LIST_PROBES);

        assert_eq!(decoded.probe(), Some(ShapeProbe::Bare));
        assert_eq!(decoded.total(), 2);
    }

    #[test]
    fn items_probe_reads_total() {
        let decoded = ListPayload::decode(json!({"items": [{"id": 1}], "total": 40}), &LIST_PROBES);

        assert_eq!(decoded.probe(), Some(ITEMS));
        assert_eq!(decoded.total(), 40);
        assert_eq!(decoded.into_items().len(), 1);
    }

    #[test]
    fn data_probe() {
        let decoded = ListPayload::decode(json!({"data": [{"id": 1}, {"id": 2}]}), &LIST_PROBES);

        assert_eq!(decoded.probe(), Some(DATA));
        assert_eq!(decoded.total(), 2);
    }

    #[test]
    fn earlier_probe_wins_when_several_match() {
        let payload = json!({"items": [{"id": 1}], "data": [{"id": 2}, {"id": 3}]});

        let decoded = ListPayload::decode(payload.clone(), &LIST_PROBES);
        assert_eq!(decoded.probe(), Some(ITEMS));

        let decoded = ListPayload::decode(payload, &[DATA, ITEMS]);
        assert_eq!(decoded.probe(), Some(DATA));
        assert_eq!(decoded.into_items().len(), 2);
    }

    #[test]
    fn non_array_field_is_skipped() {
        let decoded = ListPayload::decode(json!({"items": null, "data": [{"id": 9}]}), &LIST_PROBES);

        assert_eq!(decoded.probe(), Some(DATA));
    }

    #[test]
    fn roster_prefers_students_even_when_empty() {
        let decoded = ListPayload::decode(
            json!({"students": [], "enrollments": [{"id": 1}]}),
            &ROSTER_PROBES,
        );

        assert_eq!(decoded.probe(), Some(ShapeProbe::Field("students")));
        assert!(decoded.into_items().is_empty());
    }

    #[test]
    fn unrecognized_payload_is_empty() {
        let decoded = ListPayload::decode(json!({"message": "ok"}), &LIST_PROBES);

        assert_eq!(decoded, ListPayload::Unrecognized);
        assert_eq!(decoded.total(), 0);
        assert!(decoded.into_items().is_empty());
    }

    #[test]
    fn malformed_records_are_skipped() {
        #[derive(serde::Deserialize)]
        struct Row {
            #[allow(dead_code)]
            id: i64,
        }

        let rows: Vec<Row> =
            ListPayload::decode(json!([{"id": 1}, {"id": "x"}, {"id": 3}]), &LIST_PROBES)
                .into_records();

        assert_eq!(rows.len(), 2);
    }
}
