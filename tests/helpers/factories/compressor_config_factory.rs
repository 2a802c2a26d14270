use std::time::Duration;

use crate::engine::compressor::CompressorConfig;

/// Starts from an all-unset config; `create` returns it unresolved.
pub struct CompressorConfigFactory {
    config: CompressorConfig,
}

impl CompressorConfigFactory {
    pub fn new() -> Self {
        Self {
            config: CompressorConfig {
                timestamp_field: String::new(),
                value_fields: Vec::new(),
                group_by_fields: Vec::new(),
                unique_fields: Vec::new(),
                aggregation_method: String::new(),
                time_window: Duration::ZERO,
                workers: 0,
            },
        }
    }

    pub fn with_timestamp_field(mut self, field: &str) -> Self {
        self.config.timestamp_field = field.to_string();
        self
    }

    pub fn with_value_fields(mut self, fields: &[&str]) -> Self {
        self.config.value_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_group_by(mut self, fields: &[&str]) -> Self {
        self.config.group_by_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_unique(mut self, fields: &[&str]) -> Self {
        self.config.unique_fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    pub fn with_method(mut self, method: &str) -> Self {
        self.config.aggregation_method = method.to_string();
        self
    }

    pub fn with_window(mut self, window: Duration) -> Self {
        self.config.time_window = window;
        self
    }

    pub fn with_workers(mut self, workers: i64) -> Self {
        self.config.workers = workers;
        self
    }

    pub fn create(self) -> CompressorConfig {
        self.config
    }
}
