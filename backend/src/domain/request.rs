//! Inbound request envelope consumed by the login controller.

use serde_json::{Map, Value};

/// Request envelope whose body maps field names to JSON values.
///
/// # Examples
/// ```
/// use login_gateway::domain::ControllerRequest;
/// use serde_json::json;
///
/// let request = ControllerRequest::from_value(json!({ "email": "a@b.com", "password": "" }));
/// assert!(request.has_field("email"));
/// assert!(!request.has_field("password"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControllerRequest {
    body: Map<String, Value>,
}

impl ControllerRequest {
    /// Wrap an already decoded body.
    #[must_use]
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    /// Build a request from arbitrary JSON. Anything other than an object
    /// becomes an empty body.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(body) => Self::new(body),
            _ => Self::default(),
        }
    }

    /// Raw body mapping.
    #[must_use]
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Value stored under `name`, if any.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }

    /// Whether `name` is present with a truthy value.
    #[must_use]
    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some_and(is_truthy)
    }

    /// Remove and return `name` when it holds text.
    ///
    /// Returns `None` when the field is absent or not a JSON string.
    pub fn take_text(&mut self, name: &str) -> Option<String> {
        match self.body.remove(name) {
            Some(Value::String(text)) => Some(text),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for ControllerRequest {
    fn from(body: Map<String, Value>) -> Self {
        Self::new(body)
    }
}

/// `null`, `false`, zero and the empty string are falsy; everything else is
/// truthy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
