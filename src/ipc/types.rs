use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A command sent to the compositor: an operation name plus its data fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandMessage {
    pub method: String,
    pub data: Map<String, Value>,
}

impl CommandMessage {
    pub fn new(method: impl Into<String>) -> Self {
        CommandMessage {
            method: method.into(),
            data: Map::new(),
        }
    }

    /// Set a data field, replacing any existing value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> &mut Self {
        self.data.insert(key.to_string(), value.into());
        self
    }
}

/// One decoded reply frame. The compositor owns the schema; the only
/// structure assumed here is that error replies carry an `error` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response(Value);

impl Response {
    pub fn new(value: Value) -> Self {
        Response(value)
    }

    pub fn is_error(&self) -> bool {
        self.0.get("error").is_some()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
