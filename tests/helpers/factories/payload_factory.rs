use serde_json::Value;

/// Builds a JSON array payload as raw bytes.
pub struct PayloadFactory {
    items: Vec<Value>,
}

impl PayloadFactory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with(mut self, item: impl Into<Value>) -> Self {
        self.items.push(item.into());
        self
    }

    pub fn with_all(mut self, items: impl IntoIterator<Item = Value>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn create(self) -> Vec<u8> {
        serde_json::to_vec(&Value::Array(self.items)).unwrap()
    }
}
