use serde_json::{Map, Value, json};

use super::ops::AggregationMethod;

/// Accumulator for every record sharing one [`GroupKey`](super::group_key::GroupKey).
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub window: i64,
    pub tags: Vec<(String, String)>,
    pub values: Vec<f64>,
    pub count: usize,
    pub first_seen: i64,
    pub last_seen: i64,
}

impl Group {
    pub fn new(window: i64, timestamp: i64, tags: Vec<(String, String)>) -> Self {
        Self {
            window,
            tags,
            values: Vec::new(),
            count: 0,
            first_seen: timestamp,
            last_seen: timestamp,
        }
    }

    /// Folds one record into the group.
    pub fn observe(&mut self, timestamp: i64, values: impl IntoIterator<Item = f64>) {
        self.first_seen = self.first_seen.min(timestamp);
        self.last_seen = self.last_seen.max(timestamp);
        self.values.extend(values);
        self.count += 1;
    }

    /// Builds the output record. Tags are merged last and win on name clashes.
    pub fn finalize(
        &self,
        method: AggregationMethod,
        timestamp_field: &str,
        value_field: &str,
    ) -> Map<String, Value> {
        let mut out = Map::new();
        out.insert(
            timestamp_field.to_string(),
            json!(method.emitted_timestamp(self.first_seen, self.last_seen)),
        );
        out.insert(value_field.to_string(), json!(method.aggregate(&self.values)));
        for (name, value) in &self.tags {
            out.insert(name.clone(), Value::String(value.clone()));
        }
        out
    }
}
