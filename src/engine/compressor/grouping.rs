use std::collections::HashMap;

use ahash::RandomState as AHashRandomState;
use serde_json::{Map, Value};
use tracing::debug;

use super::config::CompressorConfig;
use super::field::{lookup, number_of, timestamp_of};
use super::group::Group;
use super::group_key::GroupKey;
use super::ops::AggregationMethod;
use super::ratio::compression_ratio;
use crate::engine::errors::CompressError;

pub(crate) type GroupMap = HashMap<GroupKey, Group, AHashRandomState>;

/// Reduces JSON arrays of timestamped records into one record per
/// (window, group-by values, unique values) combination.
///
/// The config is read-only after construction, so a single instance can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct Compressor {
    pub(crate) config: CompressorConfig,
    method: AggregationMethod,
}

impl Default for Compressor {
    fn default() -> Self {
        Self::new(CompressorConfig::default())
    }
}

impl Compressor {
    pub fn new(config: CompressorConfig) -> Self {
        let config = config.resolve();
        let method = AggregationMethod::from_name(&config.aggregation_method);
        Self { config, method }
    }

    pub fn config(&self) -> &CompressorConfig {
        &self.config
    }

    pub fn method(&self) -> AggregationMethod {
        self.method
    }

    /// Compresses one payload. Fails only when the payload is not a JSON array.
    pub fn compress_json(&self, data: &[u8]) -> Result<Vec<u8>, CompressError> {
        let groups = self.group_records(data)?;

        let timestamp_field = self.config.timestamp_field.as_str();
        let value_field = self.config.output_value_field();
        let output: Vec<Value> = groups
            .values()
            .map(|group| Value::Object(group.finalize(self.method, timestamp_field, value_field)))
            .collect();

        Ok(serde_json::to_vec(&output)?)
    }

    pub fn compression_ratio(&self, input: &[u8], output: &[u8]) -> f64 {
        compression_ratio(input.len(), output.len())
    }

    /// Single sequential scan building the group map for one payload.
    pub(crate) fn group_records(&self, data: &[u8]) -> Result<GroupMap, CompressError> {
        let parsed: Value = serde_json::from_slice(data)
            .map_err(|e| CompressError::InputFormat(format!("expected JSON array: {e}")))?;
        let Value::Array(items) = parsed else {
            return Err(CompressError::InputFormat(format!(
                "expected JSON array, found {}",
                kind_of(&parsed)
            )));
        };

        let window_secs = self.config.window_secs();
        let mut groups: GroupMap = HashMap::with_hasher(AHashRandomState::new());
        let mut skipped = 0usize;

        for item in &items {
            let Value::Object(record) = item else {
                skipped += 1;
                continue;
            };
            if !self.accumulate(record, window_secs, &mut groups) {
                skipped += 1;
            }
        }

        debug!(
            target: "ts_compressor::compressor",
            records = items.len(),
            skipped,
            groups = groups.len(),
            method = self.method.name(),
            "Grouped payload"
        );
        Ok(groups)
    }

    /// Returns false when the record has no usable timestamp.
    fn accumulate(&self, record: &Map<String, Value>, window_secs: i64, groups: &mut GroupMap) -> bool {
        let timestamp = lookup(record, &self.config.timestamp_field)
            .map(timestamp_of)
            .unwrap_or(0);
        // Zero is indistinguishable from a missing timestamp
        if timestamp == 0 {
            return false;
        }

        let window = timestamp.div_euclid(window_secs) * window_secs;
        let key = GroupKey::from_record(
            window,
            &self.config.group_by_fields,
            &self.config.unique_fields,
            record,
        );

        let values = self
            .config
            .value_fields
            .iter()
            .filter_map(|field| lookup(record, field).map(number_of));

        if let Some(group) = groups.get_mut(&key) {
            group.observe(timestamp, values);
        } else {
            let tags = key
                .tags(&self.config.group_by_fields, &self.config.unique_fields)
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            let mut group = Group::new(window, timestamp, tags);
            group.observe(timestamp, values);
            groups.insert(key, group);
        }
        true
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
