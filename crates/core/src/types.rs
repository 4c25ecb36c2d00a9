/// Error returned by capability methods implemented outside this crate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A broadcast payload is always a JSON object.
pub type Payload = serde_json::Map<String, serde_json::Value>;
