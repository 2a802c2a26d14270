use serde_json::{Map, Value, json};

pub struct RecordFactory {
    fields: Map<String, Value>,
}

impl RecordFactory {
    pub fn new() -> Self {
        let mut fields = Map::new();
        fields.insert("timestamp".into(), json!(1_700_000_000));
        fields.insert("value".into(), json!(1.0));
        Self { fields }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn without(mut self, key: &str) -> Self {
        self.fields.remove(key);
        self
    }

    pub fn create(self) -> Value {
        Value::Object(self.fields)
    }

    /// Records one second apart starting at the factory's timestamp.
    pub fn create_list(self, count: usize) -> Vec<Value> {
        let start = self
            .fields
            .get("timestamp")
            .and_then(|v| v.as_i64())
            .unwrap_or(1_700_000_000);
        (0..count)
            .map(|i| {
                let mut fields = self.fields.clone();
                fields.insert("timestamp".into(), json!(start + i as i64));
                Value::Object(fields)
            })
            .collect()
    }
}
