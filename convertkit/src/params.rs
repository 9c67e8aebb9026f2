use crate::error::BuildError;
use serde::Serialize;
use serde_json::{Map, Value};

/// Key under which the API secret travels on every call.
pub const API_SECRET_KEY: &str = "api_secret";

/// Flat key/value view of a request, ordered by key.
pub type Params = Map<String, Value>;

/// Turns a request value into a flat mapping and injects the API secret.
///
/// `()` and `None` flatten to an empty mapping. Optional fields are left out
/// through their `skip_serializing_if` annotations. The secret is inserted
/// last and wins over any field with the same name.
pub fn flatten<P: Serialize + ?Sized>(params: &P, secret: &str) -> Result<Params, BuildError> {
    let mut map = match serde_json::to_value(params).map_err(BuildError::Params)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        Value::Bool(_) => return Err(BuildError::NotAnObject("a boolean")),
        Value::Number(_) => return Err(BuildError::NotAnObject("a number")),
        Value::String(_) => return Err(BuildError::NotAnObject("a string")),
        Value::Array(_) => return Err(BuildError::NotAnObject("an array")),
    };
    map.insert(API_SECRET_KEY.to_string(), Value::String(secret.to_string()));
    Ok(map)
}

/// Renders a single parameter value for a query string.
pub fn query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
