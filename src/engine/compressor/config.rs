use std::time::Duration;

pub const DEFAULT_TIMESTAMP_FIELD: &str = "timestamp";
pub const DEFAULT_VALUE_FIELD: &str = "value";
pub const DEFAULT_AGGREGATION_METHOD: &str = "sum";
pub const DEFAULT_TIME_WINDOW: Duration = Duration::from_secs(60);
pub const DEFAULT_WORKERS: i64 = 4;

/// Window length used when the configured window is shorter than one second.
const FALLBACK_WINDOW_SECS: i64 = 60;

/// Settings consumed by the compressor.
///
/// A partially filled config (empty strings, empty lists, a zero window or a
/// non-positive worker count) is completed by [`CompressorConfig::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressorConfig {
    pub timestamp_field: String,
    pub value_fields: Vec<String>,
    pub group_by_fields: Vec<String>,
    /// Fields that must match for two records to share a group, even when
    /// every group-by field matches.
    pub unique_fields: Vec<String>,
    pub aggregation_method: String,
    pub time_window: Duration,
    pub workers: i64,
}

impl Default for CompressorConfig {
    fn default() -> Self {
        Self {
            timestamp_field: DEFAULT_TIMESTAMP_FIELD.to_string(),
            value_fields: vec![DEFAULT_VALUE_FIELD.to_string()],
            group_by_fields: Vec::new(),
            unique_fields: Vec::new(),
            aggregation_method: DEFAULT_AGGREGATION_METHOD.to_string(),
            time_window: DEFAULT_TIME_WINDOW,
            workers: DEFAULT_WORKERS,
        }
    }
}

impl CompressorConfig {
    /// Replaces every unset field with its default. Resolving twice is a no-op.
    pub fn resolve(mut self) -> Self {
        if self.timestamp_field.is_empty() {
            self.timestamp_field = DEFAULT_TIMESTAMP_FIELD.to_string();
        }
        if self.value_fields.is_empty() {
            self.value_fields = vec![DEFAULT_VALUE_FIELD.to_string()];
        }
        if self.aggregation_method.is_empty() {
            self.aggregation_method = DEFAULT_AGGREGATION_METHOD.to_string();
        }
        if self.time_window.is_zero() {
            self.time_window = DEFAULT_TIME_WINDOW;
        }
        if self.workers <= 0 {
            self.workers = DEFAULT_WORKERS;
        }
        self
    }

    /// Window length in whole seconds, never zero.
    pub fn window_secs(&self) -> i64 {
        let secs = i64::try_from(self.time_window.as_secs()).unwrap_or(i64::MAX);
        if secs == 0 { FALLBACK_WINDOW_SECS } else { secs }
    }

    /// Name under which the aggregate is emitted: the sole value field, or
    /// `"value"` when several are configured.
    pub fn output_value_field(&self) -> &str {
        match self.value_fields.as_slice() {
            [only] => only.as_str(),
            _ => DEFAULT_VALUE_FIELD,
        }
    }

    /// Number of concurrent batch permits.
    pub fn worker_permits(&self) -> usize {
        usize::try_from(self.workers)
            .ok()
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_WORKERS as usize)
    }
}
